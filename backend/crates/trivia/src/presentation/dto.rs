//! Data Transfer Objects

use auth::domain::entity::user::PlayStats;
use serde::{Deserialize, Serialize};

use crate::application::review::ReviewSummary;
use crate::domain::entity::quiz::Quiz;

// ============================================================================
// Quiz retrieval
// ============================================================================

/// GET /api/quiz query parameters
#[derive(Debug, Default, Deserialize)]
pub struct QuizQuery {
    pub difficulty: Option<String>,
}

/// GET /api/quiz response (the quiz itself)
pub type QuizResponse = Quiz;

// ============================================================================
// Result submission
// ============================================================================

/// POST /api/quiz/result request
///
/// Fields default so that missing ones surface as domain validation
/// errors (400) rather than deserialization failures.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResultRequest {
    /// Accepted and ignored; quizzes are ephemeral
    #[serde(default)]
    pub quiz_id: Option<String>,
    #[serde(default)]
    pub score: Option<u32>,
    /// Accepted and ignored; outcome thresholds are fixed
    #[serde(default)]
    pub total_questions: Option<u32>,
}

/// POST /api/quiz/result response
#[derive(Debug, Serialize)]
pub struct SubmitResultResponse {
    pub stats: PlayStats,
}

// ============================================================================
// Reviews
// ============================================================================

/// POST /api/reviews request
#[derive(Debug, Deserialize)]
pub struct SubmitReviewRequest {
    /// Raw value; validated against 1..=5 in the use case
    #[serde(default)]
    pub rating: Option<i64>,
    #[serde(default)]
    pub text: Option<String>,
}

/// POST /api/reviews response
#[derive(Debug, Serialize)]
pub struct SubmitReviewResponse {
    pub ok: bool,
}

/// GET /api/reviews/summary response
pub type ReviewSummaryResponse = ReviewSummary;
