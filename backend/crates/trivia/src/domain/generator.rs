//! Quiz Generator Capability
//!
//! Narrow interface over the external quiz-content generator. The
//! implementation lives in the infrastructure layer; by contract the
//! capability is unreliable, non-deterministic, and may return malformed
//! output.

use crate::error::TriviaResult;

/// External generator trait
///
/// Single-shot: one call per invocation, no internal retry or backoff.
/// Any retry policy belongs to the caller. Implementations must carry an
/// explicit timeout so a stuck generator cannot stall other requests.
#[trait_variant::make(QuizGenerator: Send)]
pub trait LocalQuizGenerator {
    /// Produce raw text for the given instruction prompt
    async fn generate(&self, prompt: &str) -> TriviaResult<String>;
}
