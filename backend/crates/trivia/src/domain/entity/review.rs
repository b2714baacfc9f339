//! Review Entity
//!
//! Append-only; owned exclusively by the Review Aggregator. Never mutated
//! or deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{TriviaError, TriviaResult};

/// Minimum accepted rating
pub const RATING_MIN: u8 = 1;

/// Maximum accepted rating
pub const RATING_MAX: u8 = 5;

/// A user-submitted rating/review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub user_name: String,
    pub rating: u8,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Review {
    /// Create a review stamped with the current time
    ///
    /// Fails with `InvalidRating` when the rating is outside
    /// [`RATING_MIN`]..=[`RATING_MAX`].
    pub fn new(user_name: impl Into<String>, rating: u8, text: String) -> TriviaResult<Self> {
        if !(RATING_MIN..=RATING_MAX).contains(&rating) {
            return Err(TriviaError::InvalidRating);
        }

        Ok(Self {
            user_name: user_name.into(),
            rating,
            text,
            created_at: Utc::now(),
        })
    }
}
