use super::*;
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE;
use serde_json::json;

fn token_with_payload(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
    format!("{header}.{body}.signature")
}

#[test]
fn future_exp_is_valid() {
    let token = token_with_payload(&json!({ "exp": 2_000_000_000i64 }));
    assert_eq!(
        check_token(Some(&token), 1_000_000_000),
        TokenCheck::Valid { exp: 2_000_000_000 }
    );
}

#[test]
fn exp_equal_to_now_is_expired() {
    let token = token_with_payload(&json!({ "exp": 1_000_000_000i64 }));
    assert_eq!(check_token(Some(&token), 1_000_000_000), TokenCheck::Expired);
}

#[test]
fn past_exp_is_expired() {
    let token = token_with_payload(&json!({ "exp": 500 }));
    assert_eq!(check_token(Some(&token), 1_000), TokenCheck::Expired);
}

#[test]
fn no_token_is_missing() {
    assert_eq!(check_token(None, 0), TokenCheck::Missing);
}

#[test]
fn missing_exp_claim_is_malformed() {
    let token = token_with_payload(&json!({ "sub": "user" }));
    assert_eq!(check_token(Some(&token), 0), TokenCheck::Malformed);
}

#[test]
fn two_segments_is_malformed() {
    assert_eq!(check_token(Some("header.payload"), 0), TokenCheck::Malformed);
}

#[test]
fn four_segments_is_malformed() {
    assert_eq!(check_token(Some("a.b.c.d"), 0), TokenCheck::Malformed);
}

#[test]
fn undecodable_payload_is_malformed() {
    assert_eq!(check_token(Some("a.!!!.c"), 0), TokenCheck::Malformed);
}

#[test]
fn non_json_payload_is_malformed() {
    let body = URL_SAFE_NO_PAD.encode(b"not json");
    let token = format!("h.{body}.s");
    assert_eq!(check_token(Some(&token), 0), TokenCheck::Malformed);
}

#[test]
fn padded_base64_payload_is_tolerated() {
    let body = URL_SAFE.encode(json!({ "exp": 99 }).to_string().as_bytes());
    assert!(body.ends_with('='), "fixture should exercise padding");
    let token = format!("h.{body}.s");
    assert_eq!(check_token(Some(&token), 98), TokenCheck::Valid { exp: 99 });
}

#[test]
fn identity_claims_are_read_when_present() {
    let token = token_with_payload(&json!({
        "exp": 9_999_999_999i64,
        "sub": "google-123",
        "email": "user@example.com",
        "name": "A. User",
        "picture": "https://example.com/p.png"
    }));
    let claims = decode_claims(&token).map(|c| (c.sub, c.email, c.name, c.picture));
    assert_eq!(
        claims,
        Some((
            Some("google-123".to_owned()),
            Some("user@example.com".to_owned()),
            Some("A. User".to_owned()),
            Some("https://example.com/p.png".to_owned()),
        ))
    );
}
