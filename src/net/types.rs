//! Wire types shared with the backend.
//!
//! Field names follow the backend's snake_case JSON; the gift type
//! travels as an UPPERCASE token (`"MONEY"`) while the UI shows the
//! title-case label (`"Money"`).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of a recorded gift.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SadqaType {
    #[default]
    Money,
    Food,
    Clothes,
    Other,
}

impl SadqaType {
    pub const ALL: [Self; 4] = [Self::Money, Self::Food, Self::Clothes, Self::Other];

    /// User-facing label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Money => "Money",
            Self::Food => "Food",
            Self::Clothes => "Clothes",
            Self::Other => "Other",
        }
    }

    /// Wire token, also used as the stats map key.
    pub fn token(self) -> &'static str {
        match self {
            Self::Money => "MONEY",
            Self::Food => "FOOD",
            Self::Clothes => "CLOTHES",
            Self::Other => "OTHER",
        }
    }

    /// Parse a user-facing label back into a type.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }
}

impl fmt::Display for SadqaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// User attributes received from the OAuth provider. Serializes to the
/// body of `POST /users/sync` (`sub` / `image` are the provider's field
/// names).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityProfile {
    #[serde(rename = "sub")]
    pub external_id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "image", default)]
    pub picture_url: Option<String>,
}

/// Backend user record returned by the sync endpoint. A fresh session
/// token rides along in `access_token`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendUser {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub google_id: Option<String>,
    #[serde(default)]
    pub picture_url: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub access_token: Option<String>,
}

/// A persisted donation entry as the backend returns it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SadqaEntry {
    pub id: i64,
    pub user_id: i64,
    #[serde(rename = "type")]
    pub kind: SadqaType,
    pub amount: f64,
    #[serde(default)]
    pub reason: Option<String>,
    pub received_by: String,
    /// Full timestamp, e.g. `2024-01-15T00:00:00Z`.
    pub date: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl SadqaEntry {
    /// The `YYYY-MM-DD` part of the entry's date.
    pub fn date_ymd(&self) -> &str {
        self.date.get(..10).unwrap_or(&self.date)
    }
}

/// A new entry as captured by the form: date-only, label-level type.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SadqaDraft {
    pub kind: SadqaType,
    pub amount: f64,
    pub reason: String,
    pub received_by: String,
    /// Calendar date `YYYY-MM-DD`.
    pub date: String,
}

/// Creation payload: the draft translated to the backend's shape.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewEntry {
    #[serde(rename = "type")]
    pub kind: SadqaType,
    pub amount: f64,
    pub reason: Option<String>,
    pub received_by: String,
    pub date: String,
    pub notes: Option<String>,
}

impl NewEntry {
    /// Map a draft onto the wire: empty reason becomes `null` and the
    /// date-only string gains a fixed midnight time-of-day.
    pub fn from_draft(draft: &SadqaDraft) -> Self {
        Self {
            kind: draft.kind,
            amount: draft.amount,
            reason: optional_text(&draft.reason),
            received_by: draft.received_by.clone(),
            date: midnight_timestamp(&draft.date),
            notes: None,
        }
    }
}

/// Partial update payload; only supplied fields are serialized.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SadqaUpdate {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<SadqaType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl SadqaUpdate {
    /// Full-field update from an edit form draft.
    pub fn from_draft(draft: &SadqaDraft) -> Self {
        Self {
            kind: Some(draft.kind),
            amount: Some(draft.amount),
            reason: optional_text(&draft.reason),
            received_by: Some(draft.received_by.clone()),
            date: Some(midnight_timestamp(&draft.date)),
        }
    }
}

/// Aggregate statistics as the backend reports them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SadqaStats {
    pub total_amount: f64,
    pub total_entries: u32,
    pub monthly_amount: f64,
    pub monthly_entries: u32,
    #[serde(default)]
    pub most_frequent_type: Option<SadqaType>,
    #[serde(default)]
    pub types_count: HashMap<String, u32>,
}

/// List-endpoint query filters: date range, type, minimum amount.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntryFilters {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub kind: Option<SadqaType>,
    pub min_amount: Option<f64>,
}

impl EntryFilters {
    pub fn is_empty(&self) -> bool {
        self.start_date.is_none()
            && self.end_date.is_none()
            && self.kind.is_none()
            && self.min_amount.is_none()
    }

    /// Query-string suffix for the list endpoint: `""` when no filter is
    /// set, otherwise `?start_date=...&...` in a fixed field order so
    /// identical filters always produce identical requests.
    pub fn to_query(&self) -> String {
        let mut pairs: Vec<String> = Vec::new();
        if let Some(date) = &self.start_date {
            pairs.push(format!("start_date={date}"));
        }
        if let Some(date) = &self.end_date {
            pairs.push(format!("end_date={date}"));
        }
        if let Some(kind) = self.kind {
            pairs.push(format!("type={}", kind.token()));
        }
        if let Some(amount) = self.min_amount {
            pairs.push(format!("min_amount={amount}"));
        }
        if pairs.is_empty() {
            String::new()
        } else {
            format!("?{}", pairs.join("&"))
        }
    }
}

/// Append the fixed midnight time-of-day to a `YYYY-MM-DD` string.
pub fn midnight_timestamp(date: &str) -> String {
    format!("{date}T00:00:00Z")
}

fn optional_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
