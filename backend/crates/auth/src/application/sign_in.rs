//! Sign In Use Case
//!
//! Verifies credentials and issues a fresh session.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::session::SessionIssuer;
use crate::domain::entity::user::PlayStats;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{user_name::UserName, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub user_name: String,
    pub password: String,
}

/// Sign in output
pub struct SignInOutput {
    pub token: String,
    pub user_name: String,
    pub stats: PlayStats,
}

/// Sign in use case
pub struct SignInUseCase<U>
where
    U: UserRepository,
{
    repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> SignInUseCase<U>
where
    U: UserRepository,
{
    pub fn new(repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let user_name =
            UserName::new(input.user_name).map_err(|_| AuthError::InvalidCredentials)?;
        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .repo
            .find_by_user_name(&user_name)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !user
            .password_digest
            .verify(&raw_password, self.config.pepper())
        {
            return Err(AuthError::InvalidCredentials);
        }

        let token = SessionIssuer::new(self.config.clone()).issue(&user.user_name);

        tracing::info!(user_name = %user.user_name, "User signed in");

        Ok(SignInOutput {
            token,
            user_name: user.user_name.into_string(),
            stats: user.stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::sign_up::{SignUpInput, SignUpUseCase};
    use crate::infra::memory::InMemoryUserRepository;

    async fn seeded() -> (Arc<InMemoryUserRepository>, Arc<AuthConfig>) {
        let repo = Arc::new(InMemoryUserRepository::new());
        let config = Arc::new(AuthConfig::with_random_secret());
        SignUpUseCase::new(repo.clone(), config.clone())
            .execute(SignUpInput {
                user_name: "alice".to_string(),
                password: "the right password".to_string(),
            })
            .await
            .unwrap();
        (repo, config)
    }

    #[tokio::test]
    async fn test_sign_in_with_correct_password() {
        let (repo, config) = seeded().await;
        let output = SignInUseCase::new(repo, config)
            .execute(SignInInput {
                user_name: "alice".to_string(),
                password: "the right password".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(output.user_name, "alice");
        assert_eq!(output.stats, PlayStats::default());
        assert!(!output.token.is_empty());
    }

    #[tokio::test]
    async fn test_sign_in_wrong_password() {
        let (repo, config) = seeded().await;
        let result = SignInUseCase::new(repo, config)
            .execute(SignInInput {
                user_name: "alice".to_string(),
                password: "the wrong password".to_string(),
            })
            .await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_sign_in_unknown_user() {
        let (repo, config) = seeded().await;
        let result = SignInUseCase::new(repo, config)
            .execute(SignInInput {
                user_name: "nobody".to_string(),
                password: "whatever password".to_string(),
            })
            .await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }
}
