//! HTTP Handlers

use axum::extract::{Query, State};
use axum::{Extension, Json};
use std::sync::Arc;

use auth::domain::repository::UserRepository;
use auth::presentation::middleware::CurrentUser;

use crate::application::config::TriviaConfig;
use crate::application::get_quiz::{GetQuizInput, GetQuizUseCase};
use crate::application::review::{ReviewSummaryUseCase, SubmitReviewInput, SubmitReviewUseCase};
use crate::application::submit_result::{SubmitResultInput, SubmitResultUseCase};
use crate::domain::generator::QuizGenerator;
use crate::domain::repository::ReviewRepository;
use crate::error::{TriviaError, TriviaResult};
use crate::presentation::dto::{
    QuizQuery, QuizResponse, ReviewSummaryResponse, SubmitResultRequest, SubmitResultResponse,
    SubmitReviewRequest, SubmitReviewResponse,
};

/// Shared state for trivia handlers
pub struct TriviaAppState<G, U, R>
where
    G: QuizGenerator + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
    R: ReviewRepository + Clone + Send + Sync + 'static,
{
    pub generator: Arc<G>,
    pub users: Arc<U>,
    pub reviews: Arc<R>,
    pub config: Arc<TriviaConfig>,
}

impl<G, U, R> Clone for TriviaAppState<G, U, R>
where
    G: QuizGenerator + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
    R: ReviewRepository + Clone + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            generator: self.generator.clone(),
            users: self.users.clone(),
            reviews: self.reviews.clone(),
            config: self.config.clone(),
        }
    }
}

// ============================================================================
// Quiz
// ============================================================================

/// GET /api/quiz
pub async fn get_quiz<G, U, R>(
    State(state): State<TriviaAppState<G, U, R>>,
    Query(query): Query<QuizQuery>,
) -> TriviaResult<Json<QuizResponse>>
where
    G: QuizGenerator + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
    R: ReviewRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetQuizUseCase::new(state.generator.clone(), state.config.clone());

    let quiz = use_case
        .execute(GetQuizInput {
            difficulty: query.difficulty,
        })
        .await?;

    Ok(Json(quiz))
}

/// POST /api/quiz/result
pub async fn submit_result<G, U, R>(
    State(state): State<TriviaAppState<G, U, R>>,
    Extension(user): Extension<CurrentUser>,
    Json(req): Json<SubmitResultRequest>,
) -> TriviaResult<Json<SubmitResultResponse>>
where
    G: QuizGenerator + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
    R: ReviewRepository + Clone + Send + Sync + 'static,
{
    let score = req
        .score
        .ok_or_else(|| TriviaError::Validation("score is required".to_string()))?;

    let use_case = SubmitResultUseCase::new(state.users.clone());

    let output = use_case
        .execute(SubmitResultInput {
            user_name: user.0,
            score,
            quiz_id: req.quiz_id,
            total_questions: req.total_questions,
        })
        .await?;

    Ok(Json(SubmitResultResponse {
        stats: output.stats,
    }))
}

// ============================================================================
// Reviews
// ============================================================================

/// POST /api/reviews
pub async fn submit_review<G, U, R>(
    State(state): State<TriviaAppState<G, U, R>>,
    Extension(user): Extension<CurrentUser>,
    Json(req): Json<SubmitReviewRequest>,
) -> TriviaResult<Json<SubmitReviewResponse>>
where
    G: QuizGenerator + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
    R: ReviewRepository + Clone + Send + Sync + 'static,
{
    let use_case = SubmitReviewUseCase::new(state.reviews.clone());

    use_case
        .execute(SubmitReviewInput {
            user_name: user.0,
            rating: req.rating,
            text: req.text,
        })
        .await?;

    Ok(Json(SubmitReviewResponse { ok: true }))
}

/// GET /api/reviews/summary
pub async fn review_summary<G, U, R>(
    State(state): State<TriviaAppState<G, U, R>>,
) -> TriviaResult<Json<ReviewSummaryResponse>>
where
    G: QuizGenerator + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
    R: ReviewRepository + Clone + Send + Sync + 'static,
{
    let use_case = ReviewSummaryUseCase::new(state.reviews.clone());
    let summary = use_case.execute().await?;
    Ok(Json(summary))
}
