//! Review Use Cases
//!
//! Submission appends to the aggregator's sequence; the summary derives
//! an average and a recent window on demand. Nothing is precomputed, so
//! the summary always reflects every review received so far.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::entity::review::Review;
use crate::domain::repository::ReviewRepository;
use crate::error::{TriviaError, TriviaResult};

/// Number of reviews in the summary's recent window
pub const RECENT_REVIEWS_LIMIT: usize = 10;

// ============================================================================
// Submission
// ============================================================================

/// Submit review input
#[derive(Debug)]
pub struct SubmitReviewInput {
    /// Authenticated user name, from the session gate
    pub user_name: String,
    /// Raw rating before validation; `None` when absent or non-integer
    pub rating: Option<i64>,
    pub text: Option<String>,
}

/// Submit review use case
pub struct SubmitReviewUseCase<R: ReviewRepository> {
    reviews: Arc<R>,
}

impl<R: ReviewRepository> SubmitReviewUseCase<R> {
    pub fn new(reviews: Arc<R>) -> Self {
        Self { reviews }
    }

    /// Execute review submission
    pub async fn execute(&self, input: SubmitReviewInput) -> TriviaResult<()> {
        let rating = input
            .rating
            .and_then(|r| u8::try_from(r).ok())
            .ok_or(TriviaError::InvalidRating)?;

        let review = Review::new(
            input.user_name,
            rating,
            input.text.unwrap_or_default(),
        )?;

        tracing::info!(user_name = %review.user_name, rating = review.rating, "Review received");

        self.reviews.append(review).await
    }
}

// ============================================================================
// Summary
// ============================================================================

/// Public projection of one review
///
/// The stored timestamp is for ordering only and is not exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewEntry {
    pub user: String,
    pub rating: u8,
    pub text: String,
}

/// Aggregated review summary
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummary {
    /// Arithmetic mean over all reviews; 0.0 when there are none
    pub average_rating: f64,
    pub total_ratings: usize,
    /// Most recent [`RECENT_REVIEWS_LIMIT`] reviews, newest first
    pub recent_reviews: Vec<ReviewEntry>,
}

/// Review summary use case
pub struct ReviewSummaryUseCase<R: ReviewRepository> {
    reviews: Arc<R>,
}

impl<R: ReviewRepository> ReviewSummaryUseCase<R> {
    pub fn new(reviews: Arc<R>) -> Self {
        Self { reviews }
    }

    /// Execute summary aggregation
    pub async fn execute(&self) -> TriviaResult<ReviewSummary> {
        let mut reviews = self.reviews.snapshot().await?;

        let total_ratings = reviews.len();
        let average_rating = if total_ratings == 0 {
            0.0
        } else {
            let sum: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
            f64::from(sum) / total_ratings as f64
        };

        // Stable: ties between same-timestamp reviews keep append order
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let recent_reviews = reviews
            .into_iter()
            .take(RECENT_REVIEWS_LIMIT)
            .map(|r| ReviewEntry {
                user: r.user_name,
                rating: r.rating,
                text: r.text,
            })
            .collect();

        Ok(ReviewSummary {
            average_rating,
            total_ratings,
            recent_reviews,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::infra::memory::InMemoryReviewRepository;

    fn repo() -> Arc<InMemoryReviewRepository> {
        Arc::new(InMemoryReviewRepository::new())
    }

    fn input(user: &str, rating: Option<i64>) -> SubmitReviewInput {
        SubmitReviewInput {
            user_name: user.to_string(),
            rating,
            text: Some(format!("{user} says hi")),
        }
    }

    #[tokio::test]
    async fn test_submission_and_average() {
        let reviews = repo();
        let submit = SubmitReviewUseCase::new(reviews.clone());
        let summary = ReviewSummaryUseCase::new(reviews);

        for (user, rating) in [("alice", 5), ("bob", 3), ("carol", 4)] {
            submit.execute(input(user, Some(rating))).await.unwrap();
        }

        let out = summary.execute().await.unwrap();
        assert_eq!(out.total_ratings, 3);
        assert!((out.average_rating - 4.0).abs() < f64::EPSILON);
        assert_eq!(out.recent_reviews.len(), 3);
    }

    #[tokio::test]
    async fn test_invalid_ratings_rejected() {
        let reviews = repo();
        let submit = SubmitReviewUseCase::new(reviews.clone());

        for bad in [Some(0), Some(6), Some(-1), None] {
            let err = submit.execute(input("alice", bad)).await.unwrap_err();
            assert!(matches!(err, TriviaError::InvalidRating), "for {bad:?}");
        }

        // Rejected submissions never reach the store
        let out = ReviewSummaryUseCase::new(reviews).execute().await.unwrap();
        assert_eq!(out.total_ratings, 0);
    }

    #[tokio::test]
    async fn test_missing_text_defaults_empty() {
        let reviews = repo();
        let submit = SubmitReviewUseCase::new(reviews.clone());

        submit
            .execute(SubmitReviewInput {
                user_name: "alice".to_string(),
                rating: Some(4),
                text: None,
            })
            .await
            .unwrap();

        let out = ReviewSummaryUseCase::new(reviews).execute().await.unwrap();
        assert_eq!(out.recent_reviews[0].text, "");
    }

    #[tokio::test]
    async fn test_empty_summary() {
        let out = ReviewSummaryUseCase::new(repo()).execute().await.unwrap();
        assert_eq!(out.total_ratings, 0);
        assert_eq!(out.average_rating, 0.0);
        assert!(out.recent_reviews.is_empty());
    }

    #[tokio::test]
    async fn test_recent_window_is_newest_first() {
        let reviews = repo();
        let submit = SubmitReviewUseCase::new(reviews.clone());

        for i in 0..15 {
            submit
                .execute(SubmitReviewInput {
                    user_name: format!("user{i}"),
                    rating: Some(5),
                    text: Some(i.to_string()),
                })
                .await
                .unwrap();
        }

        let out = ReviewSummaryUseCase::new(reviews).execute().await.unwrap();
        // Average covers all 15, the window only the last 10
        assert_eq!(out.total_ratings, 15);
        assert_eq!(out.recent_reviews.len(), RECENT_REVIEWS_LIMIT);
        assert_eq!(out.recent_reviews[0].user, "user14");
        assert_eq!(out.recent_reviews[9].user, "user5");
    }
}
