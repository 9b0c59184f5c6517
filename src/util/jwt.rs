//! Local decoding of the backend-issued session token.
//!
//! Only the payload is read; the signature is deliberately NOT verified.
//! This check exists so the UI can drop an expired token before making a
//! doomed request — the backend must never rely on it for authorization.

#[cfg(test)]
#[path = "jwt_test.rs"]
mod jwt_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

/// Claims read from a token payload. `exp` drives session validity; the
/// identity fields, when present, let the app restore a display identity
/// after a reload without re-running the OAuth flow.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub exp: Option<i64>,
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

/// Outcome of inspecting the stored token against the local clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenCheck {
    /// No token is stored.
    Missing,
    /// The token's `exp` lies in the future.
    Valid { exp: i64 },
    /// The token's `exp` has passed.
    Expired,
    /// Not three segments, payload not decodable, or no `exp` claim.
    Malformed,
}

/// Decode the payload segment of a `header.payload.signature` token.
///
/// Returns `None` unless the token has exactly three segments and the
/// payload is base64url-encoded JSON. Trailing padding is tolerated.
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return None;
    };
    let raw = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .ok()?;
    serde_json::from_slice(&raw).ok()
}

/// Classify a stored token at time `now` (seconds since epoch).
///
/// Malformed tokens classify separately but callers treat them exactly
/// like expired ones: clear the slot and fall back to the signed-out
/// state.
pub fn check_token(token: Option<&str>, now: i64) -> TokenCheck {
    let Some(token) = token else {
        return TokenCheck::Missing;
    };
    match decode_claims(token).and_then(|claims| claims.exp) {
        None => TokenCheck::Malformed,
        Some(exp) if exp > now => TokenCheck::Valid { exp },
        Some(_) => TokenCheck::Expired,
    }
}
