//! Sign Up Use Case
//!
//! Creates a new user account and issues an initial session.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::session::SessionIssuer;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub user_name: String,
    pub password: String,
}

/// Sign up output
pub struct SignUpOutput {
    pub token: String,
    pub user_name: String,
}

/// Sign up use case
pub struct SignUpUseCase<U>
where
    U: UserRepository,
{
    repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> SignUpUseCase<U>
where
    U: UserRepository,
{
    pub fn new(repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        // Validate user name
        let user_name =
            UserName::new(input.user_name).map_err(|e| AuthError::Validation(e.to_string()))?;

        // Validate and hash password
        let raw_password = RawPassword::new(input.password)?;
        let password_digest = UserPassword::from_raw(&raw_password, self.config.pepper())?;

        // Create and persist; the store rejects duplicates atomically,
        // so a second signup with the same name always fails here
        let user = User::new(user_name.clone(), password_digest);
        self.repo.create(user).await?;

        let token = SessionIssuer::new(self.config.clone()).issue(&user_name);

        tracing::info!(user_name = %user_name, "User signed up");

        Ok(SignUpOutput {
            token,
            user_name: user_name.into_string(),
        })
    }
}
