//! Sign-in page with Google OAuth redirect, and the callback handler.
//!
//! The sign-in button navigates to Google's authorize endpoint using the
//! implicit `id_token` flow; the provider sends the browser back here
//! with `#id_token=...` in the URL fragment. The handler builds an
//! identity profile from the token's claims and syncs it with the
//! backend, which issues the session token all API calls then carry.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::net::types::IdentityProfile;
use crate::state::auth::{self, AuthState};
use crate::util::jwt;
use crate::util::navigate::{self, NavTarget};

/// Find one `key=value` pair in a URL fragment (with or without the
/// leading `#`).
pub(crate) fn fragment_param(fragment: &str, key: &str) -> Option<String> {
    fragment
        .trim_start_matches('#')
        .split('&')
        .find_map(|pair| {
            let (k, v) = pair.split_once('=')?;
            (k == key).then(|| v.to_owned())
        })
}

/// Build an identity profile from a provider id token. Requires a
/// non-empty `email` claim; the subject falls back to the email when the
/// provider omits it.
pub(crate) fn profile_from_id_token(token: &str) -> Option<IdentityProfile> {
    let claims = jwt::decode_claims(token)?;
    auth::identity_from_claims(claims)
}

/// The Google authorize URL for the implicit `id_token` flow.
pub(crate) fn authorize_url(client_id: &str, redirect_uri: &str, nonce: &str) -> String {
    format!(
        "https://accounts.google.com/o/oauth2/v2/auth\
         ?client_id={client_id}\
         &redirect_uri={}\
         &response_type=id_token\
         &scope=openid%20email%20profile\
         &nonce={nonce}",
        urlencoding::encode(redirect_uri)
    )
}

/// Login page: sign-in button plus OAuth callback handling.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let error = RwSignal::new(None::<String>);

    // A live session skips the page entirely.
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.authenticated && state.token_valid {
            navigate::issue(NavTarget::Dashboard);
        }
    });

    // Consume the OAuth fragment once, if the provider sent us back.
    #[cfg(feature = "hydrate")]
    {
        let handled = StoredValue::new(false);
        Effect::new(move || {
            if handled.get_value() {
                return;
            }
            handled.set_value(true);
            handle_oauth_fragment(auth, error);
        });
    }

    let sign_in_href = move || {
        authorize_url(
            crate::config::google_client_id(),
            &crate::config::oauth_redirect_uri(),
            &login_nonce(),
        )
    };

    view! {
        <div class="login-page">
            <h1>"Sadqa Tracker"</h1>
            <p>"Keep a record of your charitable giving."</p>

            <Show when=move || error.get().is_some()>
                <div class="login-page__error" role="alert">
                    <h3>"Authentication Failed"</h3>
                    <p>{move || error.get().unwrap_or_default()}</p>
                </div>
            </Show>

            <Show when=move || auth.get().loading>
                <p class="login-page__status">"Completing authentication..."</p>
            </Show>

            <a class="login-button" href=sign_in_href>
                "Sign in with Google"
            </a>
        </div>
    }
}

/// Parse the current location's fragment and run the backend sync when
/// it carries an id token.
#[cfg(feature = "hydrate")]
fn handle_oauth_fragment(auth: RwSignal<AuthState>, error: RwSignal<Option<String>>) {
    let Some(fragment) = current_fragment() else {
        return;
    };

    if let Some(err) = fragment_param(&fragment, "error") {
        let decoded = urlencoding::decode(&err).map_or(err.clone(), |c| c.into_owned());
        error.set(Some(format!("OAuth error: {decoded}")));
        return;
    }

    let Some(id_token) = fragment_param(&fragment, "id_token") else {
        return;
    };
    let Some(profile) = profile_from_id_token(&id_token) else {
        error.set(Some("The sign-in response carried no usable identity.".to_owned()));
        return;
    };

    clear_fragment();
    leptos::task::spawn_local(async move {
        match auth::sync_profile(auth, profile).await {
            Ok(()) => navigate::issue(NavTarget::Dashboard),
            Err(err) => error.set(Some(err.to_string())),
        }
    });
}

#[cfg(feature = "hydrate")]
fn current_fragment() -> Option<String> {
    let hash = web_sys::window()?.location().hash().ok()?;
    if hash.is_empty() { None } else { Some(hash) }
}

/// Drop the fragment so a reload does not replay the token exchange.
#[cfg(feature = "hydrate")]
fn clear_fragment() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_hash("");
    }
}

/// Per-click nonce for the authorize request.
fn login_nonce() -> String {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        fn scramble() -> u64 {
            (js_sys::Math::random() * 9e15) as u64 ^ js_sys::Date::now() as u64
        }
        format!("{:x}", scramble())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        "nonce".to_owned()
    }
}
