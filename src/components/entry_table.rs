//! History table with edit and delete actions.

use leptos::prelude::*;

use crate::net::types::{EntryFilters, SadqaEntry};
use crate::state::auth::AuthState;
use crate::state::entries::{self, EntriesState};
use crate::util::format::{display_date, format_inr};

/// Full entry list for the history page. Edit re-fetches the entry so
/// the form opens on fresh data; delete refreshes the current view.
#[component]
pub fn EntryTable(
    filters: RwSignal<EntryFilters>,
    editing: RwSignal<Option<SadqaEntry>>,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let entries = expect_context::<RwSignal<EntriesState>>();

    let on_edit = Callback::new(move |id: i64| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_entry(id).await {
                    Ok(entry) => editing.set(Some(entry)),
                    Err(err) => entries.update(|state| state.error = Some(err.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let on_delete = Callback::new(move |id: i64| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let active = filters.get_untracked();
                if let Err(err) = entries::remove(auth, entries, id, &active).await {
                    entries.update(|state| state.error = Some(err.to_string()));
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    view! {
        <div class="entry-table">
            <Show when=move || entries.get().error.is_some()>
                <div class="entry-table__error" role="alert">
                    {move || entries.get().error.unwrap_or_default()}
                </div>
            </Show>

            {move || {
                let state = entries.get();
                if state.loading {
                    view! { <p class="entry-table__empty">"Loading entries..."</p> }.into_any()
                } else if state.items.is_empty() {
                    view! { <p class="entry-table__empty">"No entries match."</p> }.into_any()
                } else {
                    view! {
                        <table>
                            <thead>
                                <tr>
                                    <th>"Date"</th>
                                    <th>"Type"</th>
                                    <th>"Amount"</th>
                                    <th>"Received By"</th>
                                    <th>"Reason"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {state
                                    .items
                                    .iter()
                                    .rev()
                                    .map(|entry| {
                                        view! {
                                            <EntryRow
                                                entry=entry.clone()
                                                on_edit=on_edit
                                                on_delete=on_delete
                                            />
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </tbody>
                        </table>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

/// One history row.
#[component]
fn EntryRow(
    entry: SadqaEntry,
    on_edit: Callback<i64>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let id = entry.id;
    let reason = entry.reason.clone().unwrap_or_default();

    view! {
        <tr class="entry-table__row">
            <td>{display_date(&entry.date)}</td>
            <td>{entry.kind.label()}</td>
            <td>{format_inr(entry.amount)}</td>
            <td>{entry.received_by.clone()}</td>
            <td>{reason}</td>
            <td class="entry-table__actions">
                <button class="btn btn--small" on:click=move |_| on_edit.run(id)>
                    "Edit"
                </button>
                <button class="btn btn--small btn--danger" on:click=move |_| on_delete.run(id)>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
