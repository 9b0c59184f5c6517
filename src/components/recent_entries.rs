//! "Recent Sadqa" card grid for the dashboard.

use leptos::prelude::*;

use crate::net::types::SadqaEntry;
use crate::state::entries::{self, EntriesState};
use crate::util::format::{display_date, format_inr};

/// How many recent gifts the dashboard shows.
const RECENT_LIMIT: usize = 3;

/// The most recent gifts, fetched from the dedicated endpoint with the
/// cached list as fallback while the fetch is outstanding or failed.
#[component]
pub fn RecentEntries() -> impl IntoView {
    let entries = expect_context::<RwSignal<EntriesState>>();
    let fetched = RwSignal::new(None::<Vec<SadqaEntry>>);

    #[cfg(feature = "hydrate")]
    {
        let auth = expect_context::<RwSignal<crate::state::auth::AuthState>>();
        let started = StoredValue::new(false);
        Effect::new(move || {
            if auth.get().token_valid && !started.get_value() {
                started.set_value(true);
                leptos::task::spawn_local(async move {
                    match crate::net::api::recent_entries(RECENT_LIMIT as u32).await {
                        Ok(list) => fetched.set(Some(list)),
                        Err(err) => leptos::logging::warn!("recent entries fetch failed: {err}"),
                    }
                });
            }
        });
    }

    let recent = move || {
        fetched
            .get()
            .unwrap_or_else(|| entries::recent(&entries.get().items, RECENT_LIMIT))
    };

    view! {
        <div class="recent-sadqa">
            <div class="recent-sadqa__header">
                <h2>"Recent Sadqa"</h2>
            </div>
            <div class="recent-sadqa__grid">
                {move || {
                    let list = recent();
                    if list.is_empty() {
                        view! {
                            <p class="recent-sadqa__empty">
                                "No sadqa entries yet. Add one to get started!"
                            </p>
                        }
                            .into_any()
                    } else {
                        list.into_iter()
                            .map(|entry| view! { <EntryCard entry=entry/> })
                            .collect::<Vec<_>>()
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}

/// One recent-gift card.
#[component]
fn EntryCard(entry: SadqaEntry) -> impl IntoView {
    let reason = entry
        .reason
        .clone()
        .unwrap_or_else(|| "No reason specified".to_owned());

    view! {
        <div class="entry-card">
            <div class="entry-card__head">
                <span class="entry-card__type">{entry.kind.label()}</span>
            </div>
            <p class="entry-card__amount">{format_inr(entry.amount)}</p>
            <p class="entry-card__reason">{reason}</p>
            <p class="entry-card__recipient">{format!("Received by: {}", entry.received_by)}</p>
            <p class="entry-card__date">{display_date(&entry.date)}</p>
        </div>
    }
}
