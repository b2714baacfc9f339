//! Session Issuer
//!
//! Mints and validates stateless bearer sessions bound to a user name.
//! There is no session table and no revocation list; a session dies only
//! by expiry.

use std::sync::Arc;

use axum::http::HeaderMap;
use platform::bearer::extract_bearer;
use platform::token::{self, SessionClaims};

use crate::application::config::AuthConfig;
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};

/// Stateless session issuer/validator
#[derive(Clone)]
pub struct SessionIssuer {
    config: Arc<AuthConfig>,
}

impl SessionIssuer {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    /// Mint a signed session token for the given user
    ///
    /// Claims are `{sub, exp}` with the configured validity window.
    pub fn issue(&self, user_name: &UserName) -> String {
        let claims = SessionClaims::new(user_name.as_str(), self.config.session_ttl);
        token::sign(&claims, &self.config.session_secret)
    }

    /// Validate the `Authorization` header and return the embedded user name
    ///
    /// The user's continued existence is NOT re-checked here; operations
    /// that need the record must re-verify and fail on their own terms.
    pub fn authenticate(&self, headers: &HeaderMap) -> AuthResult<String> {
        let raw = extract_bearer(headers).ok_or(AuthError::Unauthorized)?;
        let claims = token::verify(raw, &self.config.session_secret)?;
        Ok(claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, header};
    use chrono::Utc;

    fn issuer() -> SessionIssuer {
        SessionIssuer::new(Arc::new(AuthConfig::with_random_secret()))
    }

    fn bearer_headers(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );
        headers
    }

    #[test]
    fn test_issue_then_authenticate() {
        let issuer = issuer();
        let token = issuer.issue(&UserName::new("alice").unwrap());

        let user = issuer.authenticate(&bearer_headers(&token)).unwrap();
        assert_eq!(user, "alice");
    }

    #[test]
    fn test_missing_header_unauthorized() {
        let result = issuer().authenticate(&HeaderMap::new());
        assert!(matches!(result, Err(AuthError::Unauthorized)));
    }

    #[test]
    fn test_wrong_scheme_unauthorized() {
        let issuer = issuer();
        let token = issuer.issue(&UserName::new("alice").unwrap());

        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Token {token}")).unwrap(),
        );
        assert!(matches!(
            issuer.authenticate(&headers),
            Err(AuthError::Unauthorized)
        ));
    }

    #[test]
    fn test_expired_token_unauthorized() {
        let config = Arc::new(AuthConfig::with_random_secret());
        let issuer = SessionIssuer::new(config.clone());

        let stale = SessionClaims::with_expiry("alice", Utc::now().timestamp() - 1);
        let token = token::sign(&stale, &config.session_secret);

        assert!(matches!(
            issuer.authenticate(&bearer_headers(&token)),
            Err(AuthError::Unauthorized)
        ));
    }

    #[test]
    fn test_foreign_signature_unauthorized() {
        let issuer_a = issuer();
        let issuer_b = issuer();
        let token = issuer_a.issue(&UserName::new("alice").unwrap());

        assert!(matches!(
            issuer_b.authenticate(&bearer_headers(&token)),
            Err(AuthError::Unauthorized)
        ));
    }
}
