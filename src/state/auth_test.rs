use super::*;

// =============================================================
// Token reconciliation
// =============================================================

#[test]
fn valid_token_is_kept() {
    assert_eq!(
        reconcile(TokenCheck::Valid { exp: 99 }),
        (true, StoreAction::Keep)
    );
}

#[test]
fn missing_token_has_nothing_to_clear() {
    assert_eq!(reconcile(TokenCheck::Missing), (false, StoreAction::Keep));
}

#[test]
fn expired_token_is_cleared() {
    assert_eq!(reconcile(TokenCheck::Expired), (false, StoreAction::Clear));
}

#[test]
fn malformed_token_is_treated_like_expired() {
    assert_eq!(reconcile(TokenCheck::Malformed), (false, StoreAction::Clear));
}

// =============================================================
// Expired view derivation
// =============================================================

#[test]
fn expired_view_requires_a_signed_in_user_without_token() {
    let state = AuthState {
        authenticated: true,
        token_valid: false,
        ..AuthState::default()
    };
    assert!(state.expired_view());
}

#[test]
fn expired_view_is_suppressed_while_loading() {
    let state = AuthState {
        authenticated: true,
        token_valid: false,
        loading: true,
        ..AuthState::default()
    };
    assert!(!state.expired_view());
}

#[test]
fn signed_out_user_is_not_expired() {
    assert!(!AuthState::default().expired_view());
}

#[test]
fn valid_session_is_not_expired() {
    let state = AuthState {
        authenticated: true,
        token_valid: true,
        ..AuthState::default()
    };
    assert!(!state.expired_view());
}

// =============================================================
// Identity restore from claims
// =============================================================

#[test]
fn identity_requires_an_email() {
    assert!(identity_from_claims(TokenClaims::default()).is_none());
    let claims = TokenClaims {
        email: Some(String::new()),
        ..TokenClaims::default()
    };
    assert!(identity_from_claims(claims).is_none());
}

#[test]
fn identity_subject_falls_back_to_email() {
    let claims = TokenClaims {
        email: Some("user@example.com".to_owned()),
        ..TokenClaims::default()
    };
    let profile = identity_from_claims(claims).unwrap();
    assert_eq!(profile.external_id, "user@example.com");
    assert_eq!(profile.email, "user@example.com");
}

#[test]
fn identity_keeps_provider_fields() {
    let claims = TokenClaims {
        exp: Some(99),
        sub: Some("google-123".to_owned()),
        email: Some("user@example.com".to_owned()),
        name: Some("A. User".to_owned()),
        picture: Some("https://example.com/p.png".to_owned()),
    };
    let profile = identity_from_claims(claims).unwrap();
    assert_eq!(profile.external_id, "google-123");
    assert_eq!(profile.name.as_deref(), Some("A. User"));
    assert_eq!(profile.picture_url.as_deref(), Some("https://example.com/p.png"));
}

// =============================================================
// Display name
// =============================================================

#[test]
fn display_name_prefers_name_then_email() {
    let mut state = AuthState {
        profile: Some(crate::net::types::IdentityProfile {
            external_id: "x".to_owned(),
            email: "user@example.com".to_owned(),
            name: Some("A. User".to_owned()),
            picture_url: None,
        }),
        ..AuthState::default()
    };
    assert_eq!(state.display_name(), "A. User");

    if let Some(profile) = state.profile.as_mut() {
        profile.name = None;
    }
    assert_eq!(state.display_name(), "user@example.com");

    state.profile = None;
    assert_eq!(state.display_name(), "Signed in");
}
