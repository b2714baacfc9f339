//! Domain Entities

pub mod quiz;
pub mod review;

pub use quiz::{Commentary, Question, Quiz};
pub use review::Review;
