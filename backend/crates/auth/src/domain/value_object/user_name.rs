//! User Name Value Object
//!
//! ユーザー名は、ユーザーを識別するための**公開識別子（ハンドル）**。
//! ログイン、画面表示、統計の記録に使用される。
//!
//! ## 設計方針
//! - ASCII文字のみ許可（a-z, 0-9, _ . -）
//! - 大文字入力は受け付けるが、canonical（正規形）は小文字
//! - NFKC正規化 → 検証 → 小文字化 の順で処理
//!
//! ## 不変条件
//! - 長さ: 3〜30文字（正規化後）
//! - 先頭・末尾: 英数字または `_`
//! - 連続ドット禁止（`..`）
//! - 英数字を最低1文字含む（記号のみ禁止）

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

// ============================================================================
// Constants
// ============================================================================

/// Minimum length for user name (in characters)
pub const USER_NAME_MIN_LENGTH: usize = 3;

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 30;

/// Allowed special characters in user name
const ALLOWED_SPECIAL_CHARS: &[char] = &['_', '.', '-'];

// ============================================================================
// Error Types
// ============================================================================

/// User name validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserNameError {
    #[error("User name must be at least {USER_NAME_MIN_LENGTH} characters")]
    TooShort,

    #[error("User name must be at most {USER_NAME_MAX_LENGTH} characters")]
    TooLong,

    #[error("User name contains invalid characters")]
    InvalidCharacter,

    #[error("User name must start and end with a letter, digit, or underscore")]
    InvalidBoundary,

    #[error("User name must contain at least one letter or digit")]
    NoAlphanumeric,

    #[error("User name must not contain consecutive dots")]
    ConsecutiveDots,
}

// ============================================================================
// Value Object
// ============================================================================

/// Validated, canonical (lowercase) user name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserName(String);

impl UserName {
    /// Create a validated user name from raw input
    ///
    /// Input is NFKC-normalized, validated, then lowercased into the
    /// canonical form used as the store key.
    pub fn new(raw: impl Into<String>) -> Result<Self, UserNameError> {
        let normalized: String = raw.into().nfkc().collect();
        let trimmed = normalized.trim();

        let char_count = trimmed.chars().count();
        if char_count < USER_NAME_MIN_LENGTH {
            return Err(UserNameError::TooShort);
        }
        if char_count > USER_NAME_MAX_LENGTH {
            return Err(UserNameError::TooLong);
        }

        for ch in trimmed.chars() {
            if !ch.is_ascii_alphanumeric() && !ALLOWED_SPECIAL_CHARS.contains(&ch) {
                return Err(UserNameError::InvalidCharacter);
            }
        }

        let first = trimmed.chars().next().unwrap_or(' ');
        let last = trimmed.chars().next_back().unwrap_or(' ');
        if !is_boundary_char(first) || !is_boundary_char(last) {
            return Err(UserNameError::InvalidBoundary);
        }

        if !trimmed.chars().any(|c| c.is_ascii_alphanumeric()) {
            return Err(UserNameError::NoAlphanumeric);
        }

        if trimmed.contains("..") {
            return Err(UserNameError::ConsecutiveDots);
        }

        Ok(Self(trimmed.to_ascii_lowercase()))
    }

    /// Get the canonical string form
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the canonical string
    pub fn into_string(self) -> String {
        self.0
    }
}

fn is_boundary_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
