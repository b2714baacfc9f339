//! Repository Traits
//!
//! Interface for review storage. Implementation is in the infrastructure
//! layer; the aggregator owns the sequence exclusively and appends are
//! atomic with respect to each other.

use crate::domain::entity::review::Review;
use crate::error::TriviaResult;

/// Review repository trait
#[trait_variant::make(ReviewRepository: Send)]
pub trait LocalReviewRepository {
    /// Append a review (atomic; no interleaved partial writes)
    async fn append(&self, review: Review) -> TriviaResult<()>;

    /// Snapshot of all reviews, in append order
    async fn snapshot(&self) -> TriviaResult<Vec<Review>>;
}
