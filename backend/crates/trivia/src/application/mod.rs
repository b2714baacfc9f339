//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod get_quiz;
pub mod normalize;
pub mod prompt;
pub mod review;
pub mod submit_result;
