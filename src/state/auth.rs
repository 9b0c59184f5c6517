//! Session state: identity, token validity, and the expiry watch.
//!
//! The session token moves through three states — no token, valid,
//! expired — driven by two inputs: a periodic local check of the stored
//! token's `exp` claim, and an explicit re-check fired whenever the
//! token slot is written. Expired and malformed tokens are cleared as
//! part of the transition, so "expired" collapses to "no token"
//! immediately; the guard derives its expired view from a provider
//! session outliving the token.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use leptos::prelude::*;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{BackendUser, IdentityProfile};
use crate::util::jwt::{self, TokenCheck, TokenClaims};
use crate::util::navigate::{self, NavTarget};
use crate::util::{clock, token_store};

/// How often the stored token's expiry is re-checked while the page is
/// visible.
pub const CHECK_INTERVAL: Duration = Duration::from_secs(300);

/// Authentication state shared across the app via context.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    /// Identity received from the OAuth provider (or restored from the
    /// session token's claims after a reload).
    pub profile: Option<IdentityProfile>,
    /// Backend user record from the last sync.
    pub backend_user: Option<BackendUser>,
    /// Whether an identity-provider session exists.
    pub authenticated: bool,
    /// True while restoring the session or syncing with the backend.
    pub loading: bool,
    /// Whether the stored session token is present and unexpired.
    pub token_valid: bool,
}

impl AuthState {
    /// The guard's "session expired" situation: a signed-in user whose
    /// token is gone or stale.
    pub fn expired_view(&self) -> bool {
        !self.loading && self.authenticated && !self.token_valid
    }

    /// Display name: provider name, else email, else a fixed fallback.
    pub fn display_name(&self) -> String {
        match &self.profile {
            Some(profile) => profile
                .name
                .clone()
                .unwrap_or_else(|| profile.email.clone()),
            None => "Signed in".to_owned(),
        }
    }
}

/// What to do with the stored token after a check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreAction {
    Keep,
    Clear,
}

/// Fold a token check into (is the session valid, what happens to the
/// slot). Expired and malformed tokens are cleared; a missing token has
/// nothing to clear.
pub fn reconcile(check: TokenCheck) -> (bool, StoreAction) {
    match check {
        TokenCheck::Valid { .. } => (true, StoreAction::Keep),
        TokenCheck::Missing => (false, StoreAction::Keep),
        TokenCheck::Expired | TokenCheck::Malformed => (false, StoreAction::Clear),
    }
}

/// Rebuild a display identity from token claims, when the token carries
/// them. Requires a non-empty email.
pub(crate) fn identity_from_claims(claims: TokenClaims) -> Option<IdentityProfile> {
    let email = claims.email.filter(|e| !e.is_empty())?;
    Some(IdentityProfile {
        external_id: claims.sub.unwrap_or_else(|| email.clone()),
        email,
        name: claims.name,
        picture_url: claims.picture,
    })
}

/// Re-check the stored token and fold the result into state. This is
/// both the periodic check body and the "token updated" signal target.
pub fn run_token_check(auth: RwSignal<AuthState>) {
    let token = token_store::get();
    let check = jwt::check_token(token.as_deref(), clock::now_secs());
    let (valid, action) = reconcile(check);
    if action == StoreAction::Clear {
        token_store::clear();
    }
    auth.update(|state| state.token_valid = valid);
}

/// Restore any persisted session at app start: a valid stored token
/// counts as an authenticated session, with the display identity
/// rebuilt from the token's claims when present.
pub fn init_session(auth: RwSignal<AuthState>) {
    let token = token_store::get();
    let check = jwt::check_token(token.as_deref(), clock::now_secs());
    let (valid, action) = reconcile(check);
    if action == StoreAction::Clear {
        token_store::clear();
    }
    let restored = if valid {
        token
            .as_deref()
            .and_then(jwt::decode_claims)
            .and_then(identity_from_claims)
    } else {
        None
    };
    auth.update(|state| {
        state.token_valid = valid;
        state.authenticated = state.authenticated || valid;
        if state.profile.is_none() {
            state.profile = restored;
        }
        state.loading = false;
    });
}

/// Exchange an identity-provider profile for a backend user and session
/// token, persist the token, and fold everything into state.
///
/// Exactly one token write per successful call; a failed sync leaves the
/// token slot untouched and is returned to the caller without retry.
pub async fn sync_profile(
    auth: RwSignal<AuthState>,
    profile: IdentityProfile,
) -> Result<(), ApiError> {
    auth.update(|state| state.loading = true);
    match api::sync_user(&profile).await {
        Ok(user) => {
            if let Some(token) = &user.access_token {
                token_store::set(token);
            }
            // Token-updated signal: validity recomputes immediately
            // rather than waiting for the next periodic check.
            run_token_check(auth);
            auth.update(|state| {
                state.profile = Some(profile);
                state.backend_user = Some(user);
                state.authenticated = true;
                state.loading = false;
            });
            Ok(())
        }
        Err(err) => {
            auth.update(|state| state.loading = false);
            Err(err)
        }
    }
}

/// Clear the session: drop the token, reset state, go to sign-in.
pub fn logout(auth: RwSignal<AuthState>) {
    token_store::clear();
    auth.set(AuthState::default());
    navigate::issue(NavTarget::SignIn);
}

/// Periodic expiry check with an explicit stop handle.
///
/// The loop sleeps for [`CHECK_INTERVAL`], skips checks while the tab is
/// hidden, and exits once stopped. Owned by `App` and stopped on
/// teardown.
pub struct ExpiryWatch {
    stopped: Arc<AtomicBool>,
}

impl ExpiryWatch {
    /// Start the watch loop (browser builds only; elsewhere this is a
    /// handle over nothing).
    pub fn start(auth: RwSignal<AuthState>) -> Self {
        let stopped = Arc::new(AtomicBool::new(false));
        #[cfg(feature = "hydrate")]
        {
            let flag = Arc::clone(&stopped);
            leptos::task::spawn_local(async move {
                loop {
                    gloo_timers::future::sleep(CHECK_INTERVAL).await;
                    if flag.load(Ordering::Relaxed) {
                        break;
                    }
                    if page_hidden() {
                        continue;
                    }
                    run_token_check(auth);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = auth;
        }
        Self { stopped }
    }

    /// Stop the loop at its next wake-up.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Relaxed);
    }

    /// Whether the watch has been stopped.
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }
}

#[cfg(feature = "hydrate")]
fn page_hidden() -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .map_or(false, |doc| doc.hidden())
}
