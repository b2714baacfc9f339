//! Bearer Authorization Header Parsing
//!
//! Common extraction of `Authorization: Bearer <token>` credentials.

use axum::http::{HeaderMap, header};

/// Expected authorization scheme
pub const BEARER_SCHEME: &str = "Bearer";

/// Extract a bearer token from request headers
///
/// Returns `None` unless the header is present, is valid UTF-8, and has
/// exactly the two-token `Bearer <token>` shape with the scheme matching
/// case-sensitively.
pub fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;

    let mut parts = value.split_whitespace();
    let scheme = parts.next()?;
    let token = parts.next()?;
    if scheme != BEARER_SCHEME || parts.next().is_some() {
        return None;
    }

    Some(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_auth(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_extracts_token() {
        let headers = headers_with_auth("Bearer abc.def");
        assert_eq!(extract_bearer(&headers), Some("abc.def"));
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(extract_bearer(&HeaderMap::new()), None);
    }

    #[test]
    fn test_wrong_scheme() {
        let headers = headers_with_auth("Basic abc.def");
        assert_eq!(extract_bearer(&headers), None);

        // Scheme comparison is case-sensitive
        let headers = headers_with_auth("bearer abc.def");
        assert_eq!(extract_bearer(&headers), None);
    }

    #[test]
    fn test_wrong_shape() {
        assert_eq!(extract_bearer(&headers_with_auth("Bearer")), None);
        assert_eq!(extract_bearer(&headers_with_auth("Bearer a b")), None);
    }
}
