//! Domain Layer
//!
//! Quiz and Review entities, the generator capability trait, and the
//! review repository trait.

pub mod entity;
pub mod generator;
pub mod repository;

// Re-exports
pub use entity::quiz::{Commentary, OPTION_COUNT, QUESTION_COUNT, Question, Quiz};
pub use entity::review::Review;
pub use generator::QuizGenerator;
pub use repository::ReviewRepository;
