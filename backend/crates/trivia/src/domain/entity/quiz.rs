//! Quiz Entity
//!
//! A generated artifact, constructed per request and never persisted.
//! Every Question in a Quiz that leaves the normalizer satisfies the
//! 4-option / valid-index constraints regardless of what the generator
//! produced.

use serde::{Deserialize, Serialize};

/// Number of questions a full quiz is asked to contain
pub const QUESTION_COUNT: usize = 10;

/// Number of options every question carries
pub const OPTION_COUNT: usize = 4;

/// Per-question commentary shown around the answer reveal
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commentary {
    pub intro: String,
    pub correct: String,
    pub wrong: String,
}

/// A single multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Unique within the quiz; assigned positionally (`"qN"`) if missing
    pub id: String,
    pub text: String,
    /// Exactly [`OPTION_COUNT`] entries after normalization
    pub options: Vec<String>,
    /// Always within `0..OPTION_COUNT` after normalization
    pub correct_index: usize,
    pub commentary: Commentary,
}

/// A generated quiz
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    /// Generated locally; never trusted from the generator unless absent
    pub quiz_id: String,
    /// Presentation order; never reordered or deduplicated
    pub questions: Vec<Question>,
}
