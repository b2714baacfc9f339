//! Infrastructure Layer
//!
//! External-service client and storage implementations.

pub mod generator_http;
pub mod memory;
