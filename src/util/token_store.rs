//! The one durable browser-local slot holding the backend session token.
//!
//! Reads and writes `localStorage` and therefore requires a browser
//! environment; non-browser builds see an always-empty slot. The token
//! survives page reloads and is destroyed on logout or detected expiry.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "sadqa_jwt_token";

/// Read the stored session token, if any.
pub fn get() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(token) = storage.get_item(STORAGE_KEY) {
                return token;
            }
        }
        None
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist a freshly issued session token, replacing any previous one.
pub fn set(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, token);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the stored session token.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}
