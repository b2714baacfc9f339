//! User Password Value Object
//!
//! Domain value object for user passwords. Delegates to
//! `platform::password` for the cryptographic operations; the hashing
//! primitive stays opaque to the rest of the domain (`hash -> digest`,
//! `verify(secret, digest) -> bool`).

use crate::error::{AuthError, AuthResult};
use platform::password::{ClearTextPassword, HashedPassword};
use std::fmt;

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
///
/// Wrapper around `ClearTextPassword` with domain-specific error handling.
/// Memory is automatically zeroized when dropped.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Create a new raw password with validation
    ///
    /// ## Errors
    /// Returns `AuthError::Validation` with a user-facing message.
    pub fn new(raw: String) -> AuthResult<Self> {
        let clear_text =
            ClearTextPassword::new(raw).map_err(|e| AuthError::Validation(e.to_string()))?;
        Ok(Self(clear_text))
    }

    /// Access the underlying clear text for hashing/verification
    pub(crate) fn clear_text(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, Safe to Store)
// ============================================================================

/// Hashed user password (the stored digest)
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash a raw password for storage
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> AuthResult<Self> {
        let hashed = raw
            .clear_text()
            .hash(pepper)
            .map_err(|e| AuthError::Internal(e.to_string()))?;
        Ok(Self(hashed))
    }

    /// Restore from a stored PHC string
    pub fn from_phc_string(s: impl Into<String>) -> AuthResult<Self> {
        let hashed = HashedPassword::from_phc_string(s)
            .map_err(|e| AuthError::Internal(e.to_string()))?;
        Ok(Self(hashed))
    }

    /// Get the PHC string for storage
    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Verify a raw password against this digest
    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(raw.clear_text(), pepper)
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UserPassword").field(&"[HASH]").finish()
    }
}
