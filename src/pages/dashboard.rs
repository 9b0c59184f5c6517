//! Dashboard: stats, recent gifts, and the add-entry dialog.

use leptos::prelude::*;

use crate::components::auth_guard::AuthGuard;
use crate::components::entry_form::EntryForm;
use crate::components::recent_entries::RecentEntries;
use crate::components::sidebar::Sidebar;
use crate::components::stats_cards::StatsCards;
use crate::net::types::{EntryFilters, SadqaEntry};
use crate::state::auth::AuthState;
use crate::state::entries::EntriesState;

/// Dashboard page, guarded by session state.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let entries = expect_context::<RwSignal<EntriesState>>();

    let show_form = RwSignal::new(false);
    let editing = RwSignal::new(None::<SadqaEntry>);
    let filters = RwSignal::new(EntryFilters::default());

    // First load once a valid session is in place.
    #[cfg(feature = "hydrate")]
    {
        let loaded = StoredValue::new(false);
        Effect::new(move || {
            if auth.get().token_valid && !loaded.get_value() {
                loaded.set_value(true);
                leptos::task::spawn_local(async move {
                    crate::state::entries::refresh(auth, entries, &EntryFilters::default()).await;
                });
            }
        });
    }

    let on_close = Callback::new(move |()| {
        show_form.set(false);
        editing.set(None);
    });

    view! {
        <AuthGuard>
            <div class="dashboard-page">
                <Sidebar active="dashboard"/>
                <main class="dashboard-page__main">
                    <header class="dashboard-page__header">
                        <h1>"Dashboard"</h1>
                        <button
                            class="btn btn--primary"
                            on:click=move |_| {
                                editing.set(None);
                                show_form.set(true);
                            }
                        >
                            "+ Add Sadqa"
                        </button>
                    </header>

                    <StatsCards/>
                    <RecentEntries/>
                </main>

                <Show when=move || show_form.get()>
                    <EntryForm editing=editing filters=filters on_close=on_close/>
                </Show>
            </div>
        </AuthGuard>
    }
}
