//! Trivia Router
//!
//! The review summary is the only public route. Everything else sits
//! behind the session gate as a route layer, so unauthorized quiz
//! requests are rejected before the handler runs and never reach the
//! external generator.

use axum::routing::{get, post};
use axum::{Router, middleware};
use std::sync::Arc;

use auth::application::config::AuthConfig;
use auth::domain::repository::UserRepository;
use auth::presentation::middleware::require_session;

use crate::application::config::TriviaConfig;
use crate::domain::generator::QuizGenerator;
use crate::domain::repository::ReviewRepository;
use crate::presentation::handlers::{self, TriviaAppState};

/// Create the trivia router for any generator/repository implementations
pub fn trivia_router<G, U, R>(
    generator: Arc<G>,
    users: Arc<U>,
    reviews: Arc<R>,
    config: Arc<TriviaConfig>,
    auth_config: Arc<AuthConfig>,
) -> Router
where
    G: QuizGenerator + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
    R: ReviewRepository + Clone + Send + Sync + 'static,
{
    let state = TriviaAppState {
        generator,
        users,
        reviews,
        config,
    };

    let protected = Router::new()
        .route("/quiz", get(handlers::get_quiz::<G, U, R>))
        .route("/quiz/result", post(handlers::submit_result::<G, U, R>))
        .route("/reviews", post(handlers::submit_review::<G, U, R>))
        .route_layer(middleware::from_fn_with_state(
            auth_config,
            require_session,
        ));

    let public = Router::new().route(
        "/reviews/summary",
        get(handlers::review_summary::<G, U, R>),
    );

    protected.merge(public).with_state(state)
}
