//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (random bytes, Base64, constant-time compare)
//! - Password hashing (Argon2id)
//! - Stateless signed session tokens (HMAC-SHA256)
//! - Bearer `Authorization` header parsing

pub mod bearer;
pub mod crypto;
pub mod password;
pub mod token;
