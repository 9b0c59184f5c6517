//! Explicit navigation commands.
//!
//! Redirects triggered by the session layer (guard countdown, 401
//! handling, logout) go through this module instead of mutating the
//! location inline, so the target of every redirect is a plain value
//! that tests can inspect without a browser.

#[cfg(test)]
#[path = "navigate_test.rs"]
mod navigate_test;

/// Destinations the session layer can redirect to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTarget {
    SignIn,
    Dashboard,
    History,
}

impl NavTarget {
    /// Application path for this destination.
    pub fn path(self) -> &'static str {
        match self {
            Self::SignIn => "/login",
            Self::Dashboard => "/",
            Self::History => "/history",
        }
    }
}

/// Issue a navigation command. A full location assignment (rather than a
/// router push) so that a stale reactive tree never survives a session
/// change.
pub fn issue(target: NavTarget) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(target.path());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = target;
    }
}
