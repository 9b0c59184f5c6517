//! History page: the full entry list with filters, edit, and delete.

use leptos::prelude::*;

use crate::components::auth_guard::AuthGuard;
use crate::components::entry_form::EntryForm;
use crate::components::entry_table::EntryTable;
use crate::components::sidebar::Sidebar;
use crate::net::types::{EntryFilters, SadqaEntry, SadqaType};
use crate::state::auth::AuthState;
use crate::state::entries::EntriesState;

/// Build filters from the raw control values. Blank controls mean "no
/// filter"; an unparseable minimum amount is ignored rather than sent.
pub(crate) fn filters_from_inputs(
    start_date: &str,
    end_date: &str,
    kind_label: &str,
    min_amount: &str,
) -> EntryFilters {
    EntryFilters {
        start_date: non_blank(start_date),
        end_date: non_blank(end_date),
        kind: SadqaType::from_label(kind_label),
        min_amount: min_amount.trim().parse::<f64>().ok().filter(|a| a.is_finite()),
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// History page, guarded by session state.
#[component]
pub fn HistoryPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let entries = expect_context::<RwSignal<EntriesState>>();

    let start_date = RwSignal::new(String::new());
    let end_date = RwSignal::new(String::new());
    let kind_label = RwSignal::new(String::new());
    let min_amount = RwSignal::new(String::new());

    let filters = RwSignal::new(EntryFilters::default());
    let editing = RwSignal::new(None::<SadqaEntry>);

    let apply = Callback::new(move |()| {
        let built = filters_from_inputs(
            &start_date.get_untracked(),
            &end_date.get_untracked(),
            &kind_label.get_untracked(),
            &min_amount.get_untracked(),
        );
        filters.set(built.clone());
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::state::entries::refresh(auth, entries, &built).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = built;
        }
    });

    // Initial load once a valid session is in place.
    #[cfg(feature = "hydrate")]
    {
        let loaded = StoredValue::new(false);
        Effect::new(move || {
            if auth.get().token_valid && !loaded.get_value() {
                loaded.set_value(true);
                apply.run(());
            }
        });
    }

    let on_close = Callback::new(move |()| editing.set(None));

    view! {
        <AuthGuard>
            <div class="history-page">
                <Sidebar active="history"/>
                <main class="history-page__main">
                    <header class="history-page__header">
                        <h1>"Sadqa History"</h1>
                    </header>

                    <div class="history-page__filters">
                        <label>
                            "From"
                            <input
                                type="date"
                                prop:value=move || start_date.get()
                                on:input=move |ev| start_date.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "To"
                            <input
                                type="date"
                                prop:value=move || end_date.get()
                                on:input=move |ev| end_date.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Type"
                            <select
                                prop:value=move || kind_label.get()
                                on:change=move |ev| kind_label.set(event_target_value(&ev))
                            >
                                <option value="">"All types"</option>
                                {SadqaType::ALL
                                    .into_iter()
                                    .map(|kind| {
                                        view! { <option value=kind.label()>{kind.label()}</option> }
                                    })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>
                        <label>
                            "Min amount"
                            <input
                                type="number"
                                min="0"
                                prop:value=move || min_amount.get()
                                on:input=move |ev| min_amount.set(event_target_value(&ev))
                            />
                        </label>
                        <button class="btn" on:click=move |_| apply.run(())>
                            "Apply"
                        </button>
                    </div>

                    <EntryTable filters=filters editing=editing/>
                </main>

                <Show when=move || editing.get().is_some()>
                    <EntryForm editing=editing filters=filters on_close=on_close/>
                </Show>
            </div>
        </AuthGuard>
    }
}
