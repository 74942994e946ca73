//! Proxy secret check for requests arriving through the RapidAPI gateway.

use axum::http::HeaderMap;
use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;
use thiserror::Error;

/// Header the gateway uses to prove a request came through it
/// (`X-RapidAPI-Proxy-Secret` on the wire; header names are case-insensitive).
pub const PROXY_SECRET_HEADER: &str = "x-rapidapi-proxy-secret";

/// Reasons a request fails the proxy secret check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No secret configured; every request fails until the deployment is fixed.
    #[error("proxy secret is not configured")]
    MisconfiguredServer,

    /// Header missing, empty, or not an exact match.
    #[error("invalid or missing proxy secret")]
    Unauthorized,
}

/// Checks the proxy secret header against the configured secret.
#[derive(Debug, Clone)]
pub struct ProxySecretGate {
    secret: Option<SecretString>,
}

impl ProxySecretGate {
    pub fn new(secret: Option<SecretString>) -> Self {
        Self { secret }
    }

    /// Validate the proxy secret carried by `headers`.
    pub fn check(&self, headers: &HeaderMap) -> Result<(), AuthError> {
        let expected = match &self.secret {
            Some(s) if !s.expose_secret().is_empty() => s.expose_secret().as_bytes(),
            _ => return Err(AuthError::MisconfiguredServer),
        };

        let provided = headers
            .get(PROXY_SECRET_HEADER)
            .map(|v| v.as_bytes())
            .filter(|v| !v.is_empty())
            .ok_or(AuthError::Unauthorized)?;

        if constant_time_eq(provided, expected) {
            Ok(())
        } else {
            Err(AuthError::Unauthorized)
        }
    }
}

/// Byte-exact comparison that does not short-circuit on the first mismatch.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    // ct_eq on slices is already false for differing lengths
    a.ct_eq(b).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderName, HeaderValue};

    fn gate(secret: Option<&str>) -> ProxySecretGate {
        ProxySecretGate::new(secret.map(|s| SecretString::new(s.to_string())))
    }

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(PROXY_SECRET_HEADER, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_matching_secret_passes() {
        assert_eq!(gate(Some("s3cr3t")).check(&headers_with("s3cr3t")), Ok(()));
    }

    #[test]
    fn test_unset_secret_is_misconfigured() {
        assert_eq!(
            gate(None).check(&headers_with("anything")),
            Err(AuthError::MisconfiguredServer)
        );
        assert_eq!(
            gate(Some("")).check(&headers_with("")),
            Err(AuthError::MisconfiguredServer)
        );
    }

    #[test]
    fn test_missing_or_empty_header_is_unauthorized() {
        let gate = gate(Some("s3cr3t"));
        assert_eq!(gate.check(&HeaderMap::new()), Err(AuthError::Unauthorized));
        assert_eq!(gate.check(&headers_with("")), Err(AuthError::Unauthorized));
    }

    #[test]
    fn test_comparison_is_exact_and_case_sensitive() {
        let gate = gate(Some("s3cr3t"));
        assert_eq!(gate.check(&headers_with("S3CR3T")), Err(AuthError::Unauthorized));
        assert_eq!(gate.check(&headers_with("s3cr3t ")), Err(AuthError::Unauthorized));
        assert_eq!(gate.check(&headers_with("s3cr3")), Err(AuthError::Unauthorized));
    }

    #[test]
    fn test_header_name_lookup_is_case_insensitive() {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_bytes(b"X-RapidAPI-Proxy-Secret").unwrap(),
            HeaderValue::from_static("s3cr3t"),
        );
        assert_eq!(gate(Some("s3cr3t")).check(&headers), Ok(()));
    }
}
