//! REST API helpers for the backend's `/api/v1` endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. On the host
//! the same functions exist but fail with a network error, since these
//! endpoints are only reachable from the browser.
//!
//! Every request carries `Authorization: Bearer <token>` when a token is
//! stored. A 401 response — from any operation — clears the token slot
//! and issues the sign-in navigation command before the error reaches
//! the caller.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::error::ApiError;
use crate::net::types::{
    BackendUser, EntryFilters, IdentityProfile, NewEntry, SadqaDraft, SadqaEntry, SadqaStats,
    SadqaUpdate,
};

#[cfg(not(feature = "hydrate"))]
const OFFLINE: &str = "not available outside the browser";

/// `Authorization` header value for a session token.
pub(crate) fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Extract a displayable message from an error response body. The
/// backend reports validation failures as `{"detail": "..."}`.
pub(crate) fn error_detail(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(ToOwned::to_owned))
        .unwrap_or_else(|| format!("HTTP {status}"))
}

/// Map a response status to the error it produces, if any. 401 maps to
/// [`ApiError::SessionExpired`] no matter which operation was running.
pub(crate) fn classify_status(status: u16, ok: bool, body: &str) -> Option<ApiError> {
    if status == 401 {
        return Some(ApiError::SessionExpired);
    }
    if ok {
        None
    } else {
        Some(ApiError::Backend(error_detail(status, body)))
    }
}

#[cfg(feature = "hydrate")]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Send one request and normalize transport / status failures.
#[cfg(feature = "hydrate")]
async fn request(
    method: Method,
    path: &str,
    body: Option<serde_json::Value>,
) -> Result<gloo_net::http::Response, ApiError> {
    use gloo_net::http::Request;

    let url = format!("{}{}", crate::config::backend_base_url(), path);
    let mut builder = match method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
        Method::Delete => Request::delete(&url),
    };
    if let Some(token) = crate::util::token_store::get() {
        builder = builder.header("Authorization", &bearer(&token));
    }

    let sent = match body {
        Some(json) => {
            builder
                .json(&json)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
        }
        None => builder.send().await,
    };
    let resp = sent.map_err(|e| ApiError::Network(e.to_string()))?;

    let status = resp.status();
    let ok = resp.ok();
    if let Some(err) = classify_status(status, ok, &body_text_for_error(&resp, ok).await) {
        if err == ApiError::SessionExpired {
            // Global side effect, independent of the triggering call.
            crate::util::token_store::clear();
            crate::util::navigate::issue(crate::util::navigate::NavTarget::SignIn);
        }
        return Err(err);
    }
    Ok(resp)
}

/// Read the body only when we are about to report an error.
#[cfg(feature = "hydrate")]
async fn body_text_for_error(resp: &gloo_net::http::Response, ok: bool) -> String {
    if ok {
        String::new()
    } else {
        resp.text().await.unwrap_or_default()
    }
}

/// Exchange an identity-provider profile for a backend user record plus
/// a freshly issued session token. Does not require (or consume) a
/// stored token.
pub async fn sync_user(profile: &IdentityProfile) -> Result<BackendUser, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::to_value(profile).map_err(|e| ApiError::Decode(e.to_string()))?;
        let resp = request(Method::Post, "/api/v1/users/sync", Some(body)).await?;
        resp.json::<BackendUser>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = profile;
        Err(ApiError::Network(OFFLINE.to_owned()))
    }
}

/// List entries, optionally narrowed by date range, type, and minimum
/// amount.
pub async fn list_entries(filters: &EntryFilters) -> Result<Vec<SadqaEntry>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let path = format!("/api/v1/sadqa/{}", filters.to_query());
        let resp = request(Method::Get, &path, None).await?;
        resp.json::<Vec<SadqaEntry>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = filters;
        Err(ApiError::Network(OFFLINE.to_owned()))
    }
}

/// Most recent `limit` entries.
pub async fn recent_entries(limit: u32) -> Result<Vec<SadqaEntry>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let path = format!("/api/v1/sadqa/recent?limit={limit}");
        let resp = request(Method::Get, &path, None).await?;
        resp.json::<Vec<SadqaEntry>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = limit;
        Err(ApiError::Network(OFFLINE.to_owned()))
    }
}

/// Fetch one entry by id.
pub async fn fetch_entry(id: i64) -> Result<SadqaEntry, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let path = format!("/api/v1/sadqa/{id}");
        let resp = request(Method::Get, &path, None).await?;
        resp.json::<SadqaEntry>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Network(OFFLINE.to_owned()))
    }
}

/// Create an entry from a validated draft.
pub async fn create_entry(draft: &SadqaDraft) -> Result<SadqaEntry, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = NewEntry::from_draft(draft);
        let body = serde_json::to_value(&payload).map_err(|e| ApiError::Decode(e.to_string()))?;
        let resp = request(Method::Post, "/api/v1/sadqa/", Some(body)).await?;
        resp.json::<SadqaEntry>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = NewEntry::from_draft(draft);
        Err(ApiError::Network(OFFLINE.to_owned()))
    }
}

/// Apply a partial update to an entry.
pub async fn update_entry(id: i64, update: &SadqaUpdate) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let path = format!("/api/v1/sadqa/{id}");
        let body = serde_json::to_value(update).map_err(|e| ApiError::Decode(e.to_string()))?;
        request(Method::Put, &path, Some(body)).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, update);
        Err(ApiError::Network(OFFLINE.to_owned()))
    }
}

/// Delete an entry.
pub async fn delete_entry(id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let path = format!("/api/v1/sadqa/{id}");
        request(Method::Delete, &path, None).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Network(OFFLINE.to_owned()))
    }
}

/// Fetch aggregate statistics.
pub async fn fetch_stats() -> Result<SadqaStats, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = request(Method::Get, "/api/v1/sadqa/stats", None).await?;
        resp.json::<SadqaStats>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network(OFFLINE.to_owned()))
    }
}
