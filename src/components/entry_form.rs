//! Add / edit dialog for donation entries.
//!
//! Validation runs before any network call: amount must parse and be
//! positive, a recipient is required, and the date may not lie in the
//! future. Violations surface inline and block submission.

#[cfg(test)]
#[path = "entry_form_test.rs"]
mod entry_form_test;

use leptos::prelude::*;

use crate::net::types::{EntryFilters, SadqaDraft, SadqaEntry, SadqaType, SadqaUpdate};
use crate::state::auth::AuthState;
use crate::state::entries::{self, EntriesState};
use crate::util::clock;

/// Preset reasons offered in the dropdown.
pub const REASON_OPTIONS: [&str; 7] = [
    "Nazar",
    "Illness",
    "Gratitude",
    "General Charity",
    "Special Occasion",
    "Seeking Protection",
    "Other",
];

/// A validation failure, in the order fields are checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftError {
    NonPositiveAmount,
    MissingRecipient,
    FutureDate,
}

impl DraftError {
    pub fn message(self) -> &'static str {
        match self {
            Self::NonPositiveAmount => "Please enter an amount greater than zero.",
            Self::MissingRecipient => "Please fill in who received the sadqa.",
            Self::FutureDate => "The date cannot be in the future.",
        }
    }
}

/// Assemble and validate a draft from raw form inputs. `today` is the
/// client's current date (`YYYY-MM-DD`); dates compare lexicographically.
pub fn build_draft(
    kind: SadqaType,
    amount_input: &str,
    reason: &str,
    received_by: &str,
    date: &str,
    today: &str,
) -> Result<SadqaDraft, DraftError> {
    let amount = amount_input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|a| a.is_finite() && *a > 0.0)
        .ok_or(DraftError::NonPositiveAmount)?;
    if received_by.trim().is_empty() {
        return Err(DraftError::MissingRecipient);
    }
    if date > today {
        return Err(DraftError::FutureDate);
    }
    Ok(SadqaDraft {
        kind,
        amount,
        reason: reason.to_owned(),
        received_by: received_by.trim().to_owned(),
        date: date.to_owned(),
    })
}

/// Modal dialog for creating an entry, or editing the one held in
/// `editing`. `filters` is the active list view, so the post-mutation
/// refresh preserves it.
#[component]
pub fn EntryForm(
    editing: RwSignal<Option<SadqaEntry>>,
    filters: RwSignal<EntryFilters>,
    on_close: Callback<()>,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let entries = expect_context::<RwSignal<EntriesState>>();

    let initial = editing.get_untracked();
    let kind = RwSignal::new(initial.as_ref().map_or(SadqaType::Money, |e| e.kind));
    let amount = RwSignal::new(
        initial
            .as_ref()
            .map_or_else(String::new, |e| e.amount.to_string()),
    );
    let reason = RwSignal::new(
        initial
            .as_ref()
            .and_then(|e| e.reason.clone())
            .unwrap_or_default(),
    );
    let received_by = RwSignal::new(initial.as_ref().map_or_else(String::new, |e| e.received_by.clone()));
    let date = RwSignal::new(
        initial
            .as_ref()
            .map_or_else(clock::today, |e| e.date_ymd().to_owned()),
    );
    let form_error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let title = if initial.is_some() { "Edit Sadqa" } else { "Add New Sadqa" };
    let submit_label = if initial.is_some() { "Save Changes" } else { "Add Sadqa" };

    let submit = Callback::new(move |()| {
        let draft = match build_draft(
            kind.get_untracked(),
            &amount.get_untracked(),
            &reason.get_untracked(),
            &received_by.get_untracked(),
            &date.get_untracked(),
            &clock::today(),
        ) {
            Ok(draft) => draft,
            Err(err) => {
                form_error.set(Some(err.message().to_owned()));
                return;
            }
        };
        form_error.set(None);
        submitting.set(true);

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let active = filters.get_untracked();
                let result = match editing.get_untracked() {
                    Some(entry) => {
                        let changes = SadqaUpdate::from_draft(&draft);
                        entries::update(auth, entries, entry.id, &changes, &active).await
                    }
                    None => entries::create(auth, entries, &draft, &active).await,
                };
                submitting.set(false);
                match result {
                    Ok(()) => on_close.run(()),
                    Err(err) => form_error.set(Some(err.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = draft;
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>

                <Show when=move || form_error.get().is_some()>
                    <div class="dialog__error" role="alert">
                        {move || form_error.get().unwrap_or_default()}
                    </div>
                </Show>

                <div class="dialog__field">
                    <span class="dialog__label">"Sadqa Type"</span>
                    <div class="dialog__type-grid">
                        {SadqaType::ALL
                            .into_iter()
                            .map(|option| {
                                let selected = move || kind.get() == option;
                                view! {
                                    <button
                                        type="button"
                                        class=move || {
                                            if selected() {
                                                "type-chip type-chip--selected"
                                            } else {
                                                "type-chip"
                                            }
                                        }
                                        on:click=move |_| kind.set(option)
                                    >
                                        {option.label()}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>

                <label class="dialog__field">
                    <span class="dialog__label">"Amount (₹)"</span>
                    <input
                        class="dialog__input"
                        type="number"
                        min="1"
                        placeholder="0"
                        prop:value=move || amount.get()
                        on:input=move |ev| {
                            amount.set(event_target_value(&ev));
                            form_error.set(None);
                        }
                    />
                </label>

                <label class="dialog__field">
                    <span class="dialog__label">"Reason for Sadqa"</span>
                    <select
                        class="dialog__input"
                        prop:value=move || reason.get()
                        on:change=move |ev| reason.set(event_target_value(&ev))
                    >
                        <option value="">"Select a reason"</option>
                        {REASON_OPTIONS
                            .into_iter()
                            .map(|option| view! { <option value=option>{option}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>

                <label class="dialog__field">
                    <span class="dialog__label">"Received By"</span>
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="e.g., Meezan Foundation, Local Mosque, etc."
                        prop:value=move || received_by.get()
                        on:input=move |ev| {
                            received_by.set(event_target_value(&ev));
                            form_error.set(None);
                        }
                    />
                </label>

                <label class="dialog__field">
                    <span class="dialog__label">"Date"</span>
                    <input
                        class="dialog__input"
                        type="date"
                        max=clock::today()
                        prop:value=move || date.get()
                        on:input=move |ev| {
                            date.set(event_target_value(&ev));
                            form_error.set(None);
                        }
                    />
                </label>

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || submitting.get()
                        on:click=move |_| submit.run(())
                    >
                        {move || if submitting.get() { "Saving..." } else { submit_label }}
                    </button>
                </div>
            </div>
        </div>
    }
}
