//! Route guard for protected pages.
//!
//! Renders one of four outcomes from the session state: a loading
//! placeholder, a sign-in prompt, a "session expired" notice that
//! counts down three seconds before redirecting, or the protected
//! children. A token turning valid mid-countdown cancels the pending
//! redirect and resumes the protected content.

#[cfg(test)]
#[path = "auth_guard_test.rs"]
mod auth_guard_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;
#[cfg(feature = "hydrate")]
use crate::util::navigate::NavTarget;

/// Seconds the expired notice shows before redirecting to sign-in.
pub const REDIRECT_DELAY_SECS: u8 = 3;

/// The four render outcomes of the guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Loading,
    SignInRequired,
    Expired,
    Protected,
}

/// Pure decision table: loading wins, then provider session, then token
/// validity.
pub fn guard_outcome(loading: bool, authenticated: bool, token_valid: bool) -> GuardOutcome {
    if loading {
        GuardOutcome::Loading
    } else if !authenticated {
        GuardOutcome::SignInRequired
    } else if !token_valid {
        GuardOutcome::Expired
    } else {
        GuardOutcome::Protected
    }
}

/// One step of the redirect countdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountdownStep {
    /// Keep counting; show the new remaining seconds.
    Tick(u8),
    /// Fire the redirect (terminal; happens at most once per countdown).
    Redirect,
    /// The session recovered or the countdown was torn down.
    Cancelled,
}

/// Advance the countdown by one second. `remaining` is the currently
/// displayed value; `still_expired` is whether the guard still sees an
/// expired session.
pub fn countdown_step(remaining: Option<u8>, still_expired: bool) -> CountdownStep {
    match remaining {
        None => CountdownStep::Cancelled,
        Some(_) if !still_expired => CountdownStep::Cancelled,
        Some(0 | 1) => CountdownStep::Redirect,
        Some(n) => CountdownStep::Tick(n - 1),
    }
}

/// Guard wrapper for protected routes.
#[component]
pub fn AuthGuard(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let countdown = RwSignal::new(None::<u8>);

    // Start the countdown when the session turns expired; cancel the
    // pending redirect as soon as it recovers.
    Effect::new(move || {
        let state = auth.get();
        let outcome = guard_outcome(state.loading, state.authenticated, state.token_valid);
        if outcome == GuardOutcome::Expired {
            if countdown.get_untracked().is_none() {
                countdown.set(Some(REDIRECT_DELAY_SECS));
                #[cfg(feature = "hydrate")]
                spawn_countdown(auth, countdown);
            }
        } else {
            countdown.set(None);
        }
    });

    view! {
        {move || {
            let state = auth.get();
            match guard_outcome(state.loading, state.authenticated, state.token_valid) {
                GuardOutcome::Loading => {
                    view! {
                        <div class="guard guard--loading">
                            <div class="guard__spinner"></div>
                            <p>"Checking authentication..."</p>
                        </div>
                    }
                        .into_any()
                }
                GuardOutcome::SignInRequired => {
                    view! {
                        <div class="guard guard--signin">
                            <h1>"Authentication Required"</h1>
                            <p>"Please sign in to access your Sadqa tracker."</p>
                            <a href="/login" class="btn btn--primary">
                                "Sign In"
                            </a>
                        </div>
                    }
                        .into_any()
                }
                GuardOutcome::Expired => {
                    view! {
                        <div class="guard guard--expired">
                            <h1>"Session Expired"</h1>
                            <p>
                                "Your authentication session has expired. "
                                "You'll be redirected to sign in again."
                            </p>
                            <p class="guard__countdown">
                                {move || {
                                    let secs = countdown.get().unwrap_or(REDIRECT_DELAY_SECS);
                                    let plural = if secs == 1 { "" } else { "s" };
                                    format!("Redirecting in {secs} second{plural}...")
                                }}
                            </p>
                            <a href="/login" class="btn">
                                "Sign In Now"
                            </a>
                        </div>
                    }
                        .into_any()
                }
                GuardOutcome::Protected => children().into_any(),
            }
        }}
    }
}

/// Tick the countdown once per second until it redirects or cancels.
#[cfg(feature = "hydrate")]
fn spawn_countdown(auth: RwSignal<AuthState>, countdown: RwSignal<Option<u8>>) {
    leptos::task::spawn_local(async move {
        loop {
            gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
            let still_expired = auth.get_untracked().expired_view();
            match countdown_step(countdown.get_untracked(), still_expired) {
                CountdownStep::Tick(remaining) => countdown.set(Some(remaining)),
                CountdownStep::Redirect => {
                    countdown.set(None);
                    crate::util::navigate::issue(NavTarget::SignIn);
                    break;
                }
                CountdownStep::Cancelled => {
                    countdown.set(None);
                    break;
                }
            }
        }
    });
}
