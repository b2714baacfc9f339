//! Auth Middleware
//!
//! Middleware for requiring a valid bearer session on protected routes.
//! This is the sole gate in front of quiz retrieval, result submission,
//! and review submission; rejected requests never reach the handler (and
//! therefore never touch the external generator).

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::session::SessionIssuer;

/// Authenticated user name stored in request extensions
#[derive(Debug, Clone)]
pub struct CurrentUser(pub String);

/// Middleware that requires a valid bearer session
///
/// On success the embedded user name is inserted into request extensions
/// as [`CurrentUser`]. Existence of that user is not re-checked here.
pub async fn require_session(
    State(config): State<Arc<AuthConfig>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let issuer = SessionIssuer::new(config);

    match issuer.authenticate(req.headers()) {
        Ok(user_name) => {
            req.extensions_mut().insert(CurrentUser(user_name));
            Ok(next.run(req).await)
        }
        Err(e) => Err(e.into_response()),
    }
}
