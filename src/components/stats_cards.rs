//! Aggregate stat tiles: total given, this month, most frequent type.

use leptos::prelude::*;

use crate::state::entries::EntriesState;
use crate::util::format::format_inr;

/// Three summary cards over the entry cache. The backend's aggregates
/// are primary; a local derivation fills in when the stats fetch failed.
#[component]
pub fn StatsCards() -> impl IntoView {
    let entries = expect_context::<RwSignal<EntriesState>>();

    let stats = move || entries.get().display_stats();
    let total = move || format_inr(stats().total_amount);
    let monthly = move || format_inr(stats().monthly_amount);
    let most_frequent = move || {
        stats()
            .most_frequent_type
            .map_or_else(|| "N/A".to_owned(), |kind| kind.label().to_owned())
    };

    view! {
        <div class="stats-cards">
            <div class="stats-cards__card">
                <h3>"Total Sadqa Given"</h3>
                <p class="stats-cards__value">{total}</p>
            </div>
            <div class="stats-cards__card">
                <h3>"Sadqa This Month"</h3>
                <p class="stats-cards__value">{monthly}</p>
            </div>
            <div class="stats-cards__card">
                <h3>"Most Frequent Type"</h3>
                <p class="stats-cards__value">{most_frequent}</p>
            </div>
        </div>
    }
}
