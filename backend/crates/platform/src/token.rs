//! Stateless Signed Session Tokens
//!
//! Self-contained bearer credentials: a JSON claim set signed with
//! HMAC-SHA256. There is no server-side session table; invalidation is
//! implicit via the embedded expiry.
//!
//! Wire format: `base64url(claims_json) + "." + base64url(signature)`.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use thiserror::Error;

use crate::crypto::constant_time_eq;

/// Claim set embedded in a session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (user name)
    pub sub: String,
    /// Expiry (Unix timestamp, seconds)
    pub exp: i64,
}

impl SessionClaims {
    /// Create claims expiring `ttl` from now
    pub fn new(sub: impl Into<String>, ttl: Duration) -> Self {
        Self {
            sub: sub.into(),
            exp: (Utc::now() + ttl).timestamp(),
        }
    }

    /// Create claims with an explicit expiry timestamp (seconds)
    pub fn with_expiry(sub: impl Into<String>, exp: i64) -> Self {
        Self {
            sub: sub.into(),
            exp,
        }
    }

    /// Check if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// Token verification errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Token does not have the `payload.signature` shape or is not valid base64/JSON
    #[error("Malformed token")]
    Malformed,

    /// Signature does not match the payload
    #[error("Invalid token signature")]
    InvalidSignature,

    /// Claims have expired
    #[error("Token has expired")]
    Expired,
}

/// Sign a claim set into a token string
pub fn sign(claims: &SessionClaims, secret: &[u8; 32]) -> String {
    let payload_json =
        serde_json::to_vec(claims).expect("SessionClaims serializes to JSON infallibly");
    let payload = URL_SAFE_NO_PAD.encode(&payload_json);

    let signature = URL_SAFE_NO_PAD.encode(mac_over(payload.as_bytes(), secret));

    format!("{payload}.{signature}")
}

/// Verify a token and return the embedded claims
///
/// Signature is checked before the payload is trusted; expiry is checked
/// after. Both failures are indistinguishable to the client (401), but the
/// caller can log the distinction.
pub fn verify(token: &str, secret: &[u8; 32]) -> Result<SessionClaims, TokenError> {
    let (payload, signature_b64) = token.split_once('.').ok_or(TokenError::Malformed)?;
    if payload.is_empty() || signature_b64.contains('.') {
        return Err(TokenError::Malformed);
    }

    let signature = URL_SAFE_NO_PAD
        .decode(signature_b64)
        .map_err(|_| TokenError::Malformed)?;

    let expected = mac_over(payload.as_bytes(), secret);
    if !constant_time_eq(&expected, &signature) {
        return Err(TokenError::InvalidSignature);
    }

    let payload_json = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| TokenError::Malformed)?;
    let claims: SessionClaims =
        serde_json::from_slice(&payload_json).map_err(|_| TokenError::Malformed)?;

    if claims.is_expired() {
        return Err(TokenError::Expired);
    }

    Ok(claims)
}

fn mac_over(data: &[u8], secret: &[u8; 32]) -> [u8; 32] {
    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(data);
    mac.finalize().into_bytes().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: [u8; 32] = [7u8; 32];

    #[test]
    fn test_sign_verify_roundtrip() {
        let claims = SessionClaims::new("alice", Duration::days(7));
        let token = sign(&claims, &SECRET);

        let verified = verify(&token, &SECRET).unwrap();
        assert_eq!(verified, claims);
    }

    #[test]
    fn test_expired_token_rejected() {
        let claims = SessionClaims::with_expiry("alice", Utc::now().timestamp() - 60);
        let token = sign(&claims, &SECRET);

        assert_eq!(verify(&token, &SECRET), Err(TokenError::Expired));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let claims = SessionClaims::new("alice", Duration::days(7));
        let token = sign(&claims, &SECRET);

        let other = [9u8; 32];
        assert_eq!(verify(&token, &other), Err(TokenError::InvalidSignature));
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let claims = SessionClaims::new("alice", Duration::days(7));
        let token = sign(&claims, &SECRET);

        let forged_claims = SessionClaims::new("mallory", Duration::days(7));
        let forged_payload = URL_SAFE_NO_PAD
            .encode(serde_json::to_vec(&forged_claims).unwrap());
        let signature = token.split_once('.').unwrap().1;
        let forged = format!("{forged_payload}.{signature}");

        assert_eq!(
            verify(&forged, &SECRET),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_malformed_tokens_rejected() {
        assert_eq!(verify("", &SECRET), Err(TokenError::Malformed));
        assert_eq!(verify("nodothere", &SECRET), Err(TokenError::Malformed));
        assert_eq!(verify("a.b.c", &SECRET), Err(TokenError::Malformed));
        assert_eq!(
            verify("payload.!!notbase64!!", &SECRET),
            Err(TokenError::Malformed)
        );
    }
}
