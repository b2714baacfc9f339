//! Trivia Backend Module
//!
//! Quiz generation, play-result recording, and review aggregation.
//!
//! Clean Architecture structure:
//! - `domain/` - Quiz/Review entities, generator capability, repository traits
//! - `application/` - Use cases; the quiz normalizer is the algorithmic core
//! - `infra/` - Generator HTTP client, in-memory review store
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Reliability Model
//! The external generator is unreliable by contract: free-form text that is
//! supposed to be JSON but may be malformed, incomplete, or off-schema. The
//! normalizer repairs everything structurally repairable; only unparsable
//! output is a hard failure, and generation is never retried internally.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::TriviaConfig;
pub use error::{TriviaError, TriviaResult};
pub use infra::generator_http::ChatCompletionsGenerator;
pub use infra::memory::InMemoryReviewRepository;
pub use presentation::router::trivia_router;

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}
