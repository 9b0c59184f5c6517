//! Externally supplied configuration.
//!
//! The backend base URL and OAuth client id are baked in at compile time
//! (WASM has no process environment). Defaults match a local backend on
//! port 8000.

/// Base URL of the REST backend, without a trailing slash.
pub fn backend_base_url() -> &'static str {
    option_env!("SADQA_BACKEND_URL").unwrap_or("http://localhost:8000")
}

/// Google OAuth client id. Empty when not configured; the login page
/// still renders but the sign-in redirect will be rejected by Google.
pub fn google_client_id() -> &'static str {
    option_env!("SADQA_GOOGLE_CLIENT_ID").unwrap_or("")
}

/// Absolute redirect URI the OAuth provider sends the browser back to.
/// Derived from the current origin so one build works across hosts.
pub fn oauth_redirect_uri() -> String {
    #[cfg(feature = "hydrate")]
    {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_else(|| "http://localhost:3000".to_owned());
        format!("{origin}/login")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        "http://localhost:3000/login".to_owned()
    }
}
