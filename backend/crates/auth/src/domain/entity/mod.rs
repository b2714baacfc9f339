//! Domain Entities

pub mod user;

pub use user::{Outcome, PlayStats, User};
