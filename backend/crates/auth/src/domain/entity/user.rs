//! User Entity
//!
//! Identity record: user name, password digest, and lifetime play
//! statistics. The store owns these records exclusively; statistics are
//! mutated only through result submission for the same user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_object::{user_name::UserName, user_password::UserPassword};

// ============================================================================
// Outcome policy
// ============================================================================

/// Minimum score counted as a win
///
/// These thresholds are policy constants tied to a 10-question quiz. Result
/// submission also carries a `total_questions` field, which is accepted but
/// never consulted here; if the quiz length ever varies the thresholds will
/// misclassify. Kept literal for behavioral compatibility.
pub const WIN_THRESHOLD: u32 = 6;

/// Exact score counted as a draw
pub const DRAW_SCORE: u32 = 5;

/// Classification of a single play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    /// Classify a score against the fixed thresholds
    pub fn classify(score: u32) -> Self {
        if score >= WIN_THRESHOLD {
            Outcome::Win
        } else if score == DRAW_SCORE {
            Outcome::Draw
        } else {
            Outcome::Loss
        }
    }
}

// ============================================================================
// Play statistics
// ============================================================================

/// Lifetime play statistics
///
/// Invariant: `total_played == total_wins + total_draws + total_losses`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayStats {
    pub total_played: u32,
    pub total_wins: u32,
    pub total_draws: u32,
    pub total_losses: u32,
}

impl PlayStats {
    /// Record one play with the given score
    pub fn record(&mut self, score: u32) -> Outcome {
        let outcome = Outcome::classify(score);
        self.total_played += 1;
        match outcome {
            Outcome::Win => self.total_wins += 1,
            Outcome::Draw => self.total_draws += 1,
            Outcome::Loss => self.total_losses += 1,
        }
        outcome
    }
}

// ============================================================================
// User entity
// ============================================================================

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Canonical user name (unique store key, immutable)
    pub user_name: UserName,
    /// Password digest (opaque secret proof)
    pub password_digest: UserPassword,
    /// Lifetime play statistics
    pub stats: PlayStats,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with zeroed statistics
    pub fn new(user_name: UserName, password_digest: UserPassword) -> Self {
        Self {
            user_name,
            password_digest,
            stats: PlayStats::default(),
            created_at: Utc::now(),
        }
    }

    /// Record a play result against this user's statistics
    pub fn record_result(&mut self, score: u32) -> Outcome {
        self.stats.record(score)
    }
}
