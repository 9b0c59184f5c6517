//! Donation entries: read-through cache, aggregate stats, and the CRUD
//! orchestration against the backend.
//!
//! Every mutation is followed by one full refresh of the list and the
//! stats (read-your-writes via refresh rather than optimistic local
//! patching — an extra round trip, acceptable at this write volume).

#[cfg(test)]
#[path = "entries_test.rs"]
mod entries_test;

use std::collections::HashMap;

use leptos::prelude::*;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{EntryFilters, SadqaDraft, SadqaEntry, SadqaStats, SadqaType, SadqaUpdate};
use crate::state::auth::AuthState;
use crate::util::clock;

/// Shared entry-list state backed by the REST endpoints.
#[derive(Clone, Debug, Default)]
pub struct EntriesState {
    /// Read-through cache from the most recent list fetch.
    pub items: Vec<SadqaEntry>,
    /// Backend-reported aggregates from the most recent stats fetch.
    pub stats: Option<SadqaStats>,
    pub loading: bool,
    /// Last displayable fetch error, if any.
    pub error: Option<String>,
}

impl EntriesState {
    /// Stats for display: the backend value when present, otherwise a
    /// local derivation from the cache.
    pub fn display_stats(&self) -> SadqaStats {
        self.stats
            .clone()
            .unwrap_or_else(|| computed_stats(&self.items, month_key(&clock::today())))
    }
}

/// The `YYYY-MM` month key of a date or timestamp string.
pub fn month_key(date: &str) -> &str {
    date.get(..7).unwrap_or(date)
}

/// The most recent `n` entries, newest first. The backend returns the
/// list oldest-first, so this takes from the tail.
pub fn recent(entries: &[SadqaEntry], n: usize) -> Vec<SadqaEntry> {
    entries.iter().rev().take(n).cloned().collect()
}

/// Derive aggregate statistics from a cached entry list.
///
/// Duplicates the backend's computation on purpose: the backend value is
/// primary for display, and the test suite asserts the two derivations
/// agree on the same entry set.
pub fn computed_stats(entries: &[SadqaEntry], current_month: &str) -> SadqaStats {
    let mut stats = SadqaStats::default();
    let mut counts: HashMap<String, u32> = HashMap::new();

    for entry in entries {
        stats.total_amount += entry.amount;
        stats.total_entries += 1;
        if month_key(&entry.date) == current_month {
            stats.monthly_amount += entry.amount;
            stats.monthly_entries += 1;
        }
        *counts.entry(entry.kind.token().to_owned()).or_insert(0) += 1;
    }

    // Ties resolve in declaration order, so the result is stable.
    let mut best: Option<(SadqaType, u32)> = None;
    for kind in SadqaType::ALL {
        if let Some(&count) = counts.get(kind.token()) {
            if best.is_none_or(|(_, max)| count > max) {
                best = Some((kind, count));
            }
        }
    }
    stats.most_frequent_type = best.map(|(kind, _)| kind);
    stats.types_count = counts;
    stats
}

/// Refuse data operations outright when no valid session token exists,
/// before any network call is made.
pub fn ensure_token(state: &AuthState) -> Result<(), ApiError> {
    if state.token_valid {
        Ok(())
    } else {
        Err(ApiError::Unauthenticated)
    }
}

/// Re-fetch the entry list and the stats. List failures are surfaced on
/// the state; a stats failure only logs, leaving the previous value (the
/// display path falls back to the local derivation).
pub async fn refresh(
    auth: RwSignal<AuthState>,
    entries: RwSignal<EntriesState>,
    filters: &EntryFilters,
) {
    if ensure_token(&auth.get_untracked()).is_err() {
        return;
    }
    entries.update(|state| {
        state.loading = true;
        state.error = None;
    });

    match api::list_entries(filters).await {
        Ok(items) => entries.update(|state| state.items = items),
        Err(err) => entries.update(|state| state.error = Some(err.to_string())),
    }
    match api::fetch_stats().await {
        Ok(stats) => entries.update(|state| state.stats = Some(stats)),
        Err(err) => leptos::logging::warn!("stats refresh failed: {err}"),
    }

    entries.update(|state| state.loading = false);
}

/// Create an entry, then refresh list + stats.
pub async fn create(
    auth: RwSignal<AuthState>,
    entries: RwSignal<EntriesState>,
    draft: &SadqaDraft,
    filters: &EntryFilters,
) -> Result<(), ApiError> {
    ensure_token(&auth.get_untracked())?;
    api::create_entry(draft).await?;
    refresh(auth, entries, filters).await;
    Ok(())
}

/// Update an entry, then refresh list + stats.
pub async fn update(
    auth: RwSignal<AuthState>,
    entries: RwSignal<EntriesState>,
    id: i64,
    changes: &SadqaUpdate,
    filters: &EntryFilters,
) -> Result<(), ApiError> {
    ensure_token(&auth.get_untracked())?;
    api::update_entry(id, changes).await?;
    refresh(auth, entries, filters).await;
    Ok(())
}

/// Delete an entry, then refresh list + stats.
pub async fn remove(
    auth: RwSignal<AuthState>,
    entries: RwSignal<EntriesState>,
    id: i64,
    filters: &EntryFilters,
) -> Result<(), ApiError> {
    ensure_token(&auth.get_untracked())?;
    api::delete_entry(id).await?;
    refresh(auth, entries, filters).await;
    Ok(())
}
