//! In-Memory Review Storage
//!
//! Append-only sequence behind a single lock. Appends are atomic;
//! snapshots clone the sequence so aggregation never holds the lock.
//! Data is lost on process restart, matching the rest of the in-memory
//! stores.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entity::review::Review;
use crate::domain::repository::ReviewRepository;
use crate::error::TriviaResult;

/// In-memory review repository
#[derive(Clone, Default)]
pub struct InMemoryReviewRepository {
    reviews: Arc<RwLock<Vec<Review>>>,
}

impl InMemoryReviewRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReviewRepository for InMemoryReviewRepository {
    async fn append(&self, review: Review) -> TriviaResult<()> {
        self.reviews.write().await.push(review);
        Ok(())
    }

    async fn snapshot(&self) -> TriviaResult<Vec<Review>> {
        Ok(self.reviews.read().await.clone())
    }
}
