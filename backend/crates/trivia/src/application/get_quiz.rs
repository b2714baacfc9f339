//! Get Quiz Use Case
//!
//! Orchestrates one quiz generation: build the prompt, make exactly one
//! generator call, normalize the reply. No retry, no caching; every
//! request reaches the generator once. Failures at any stage surface as
//! `GenerationFailed` with the underlying cause so the client can decide
//! whether to retry.

use std::sync::Arc;

use kernel::id::QuizId;

use crate::application::config::TriviaConfig;
use crate::application::{normalize, prompt};
use crate::domain::entity::quiz::Quiz;
use crate::domain::generator::QuizGenerator;
use crate::error::{TriviaError, TriviaResult};

/// Get quiz input
#[derive(Debug, Default)]
pub struct GetQuizInput {
    /// Requested difficulty; falls back to the configured default
    pub difficulty: Option<String>,
}

/// Get quiz use case
pub struct GetQuizUseCase<G: QuizGenerator> {
    generator: Arc<G>,
    config: Arc<TriviaConfig>,
}

impl<G: QuizGenerator> GetQuizUseCase<G> {
    pub fn new(generator: Arc<G>, config: Arc<TriviaConfig>) -> Self {
        Self { generator, config }
    }

    /// Execute one generation round trip
    pub async fn execute(&self, input: GetQuizInput) -> TriviaResult<Quiz> {
        let difficulty = input
            .difficulty
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| self.config.default_difficulty.clone());

        let quiz_id = QuizId::new().to_string();
        let prompt = prompt::build_prompt(&difficulty, &quiz_id);

        tracing::info!(quiz_id = %quiz_id, difficulty = %difficulty, "Requesting quiz generation");

        let raw = self
            .generator
            .generate(&prompt)
            .await
            .map_err(|e| TriviaError::GenerationFailed(e.to_string()))?;

        let quiz = normalize::normalize(&raw, &quiz_id)
            .map_err(|e| TriviaError::GenerationFailed(e.to_string()))?;

        tracing::info!(
            quiz_id = %quiz.quiz_id,
            questions = quiz.questions.len(),
            "Quiz generated"
        );

        Ok(quiz)
    }
}
