//! Submit Result Use Case
//!
//! Records one play against the submitting user's lifetime statistics.
//! The quiz id and total-question count are accepted for wire
//! compatibility but never consulted: quizzes are ephemeral, so there is
//! nothing to validate the id against, and outcome classification runs on
//! fixed thresholds.

use std::sync::Arc;

use auth::domain::entity::user::PlayStats;
use auth::domain::repository::UserRepository;
use auth::domain::value_object::user_name::UserName;

use crate::error::{TriviaError, TriviaResult};

/// Submit result input
#[derive(Debug)]
pub struct SubmitResultInput {
    /// Authenticated user name, from the session gate
    pub user_name: String,
    pub score: u32,
    /// Accepted and ignored
    pub quiz_id: Option<String>,
    /// Accepted and ignored
    pub total_questions: Option<u32>,
}

/// Submit result output
#[derive(Debug)]
pub struct SubmitResultOutput {
    pub stats: PlayStats,
}

/// Submit result use case
pub struct SubmitResultUseCase<U: UserRepository> {
    users: Arc<U>,
}

impl<U: UserRepository> SubmitResultUseCase<U> {
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }

    /// Execute result submission
    pub async fn execute(&self, input: SubmitResultInput) -> TriviaResult<SubmitResultOutput> {
        let user_name = UserName::new(input.user_name.as_str())
            .map_err(|e| TriviaError::Validation(e.to_string()))?;

        let stats = self
            .users
            .record_result(&user_name, input.score)
            .await?
            .ok_or(TriviaError::UserNotFound)?;

        tracing::info!(
            user_name = %user_name,
            score = input.score,
            total_played = stats.total_played,
            "Play result recorded"
        );

        Ok(SubmitResultOutput { stats })
    }
}
