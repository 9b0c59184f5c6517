use super::*;
use serde_json::json;

fn draft() -> SadqaDraft {
    SadqaDraft {
        kind: SadqaType::Money,
        amount: 500.0,
        reason: String::new(),
        received_by: "Local Mosque".to_owned(),
        date: "2024-01-15".to_owned(),
    }
}

#[test]
fn sadqa_type_travels_as_uppercase_token() {
    assert_eq!(serde_json::to_string(&SadqaType::Money).ok().as_deref(), Some("\"MONEY\""));
    assert_eq!(
        serde_json::from_str::<SadqaType>("\"CLOTHES\"").ok(),
        Some(SadqaType::Clothes)
    );
}

#[test]
fn labels_round_trip() {
    for kind in SadqaType::ALL {
        assert_eq!(SadqaType::from_label(kind.label()), Some(kind));
    }
    assert_eq!(SadqaType::from_label("Jewellery"), None);
}

#[test]
fn entry_deserializes_from_backend_shape() {
    let entry: SadqaEntry = serde_json::from_value(json!({
        "id": 7,
        "user_id": 3,
        "type": "FOOD",
        "amount": 250.0,
        "reason": "Gratitude",
        "received_by": "Shelter Kitchen",
        "date": "2024-02-03T00:00:00Z",
        "notes": null,
        "created_at": "2024-02-03T10:00:00Z",
        "updated_at": "2024-02-03T10:00:00Z"
    }))
    .unwrap();
    assert_eq!(entry.kind, SadqaType::Food);
    assert_eq!(entry.date_ymd(), "2024-02-03");
    assert_eq!(entry.reason.as_deref(), Some("Gratitude"));
}

#[test]
fn create_payload_uppercases_type_and_appends_midnight() {
    let payload = serde_json::to_value(NewEntry::from_draft(&draft())).unwrap();
    assert_eq!(payload["type"], "MONEY");
    assert_eq!(payload["date"], "2024-01-15T00:00:00Z");
    assert_eq!(payload["amount"], 500.0);
    assert_eq!(payload["received_by"], "Local Mosque");
    assert!(payload["reason"].is_null());
    assert!(payload["notes"].is_null());
}

#[test]
fn create_payload_keeps_a_real_reason() {
    let mut d = draft();
    d.reason = " Nazar ".to_owned();
    let payload = serde_json::to_value(NewEntry::from_draft(&d)).unwrap();
    assert_eq!(payload["reason"], "Nazar");
}

#[test]
fn update_serializes_only_supplied_fields() {
    let update = SadqaUpdate {
        amount: Some(750.0),
        ..SadqaUpdate::default()
    };
    let payload = serde_json::to_value(update).unwrap();
    assert_eq!(payload, json!({ "amount": 750.0 }));
}

#[test]
fn update_from_draft_carries_every_field() {
    let payload = serde_json::to_value(SadqaUpdate::from_draft(&draft())).unwrap();
    assert_eq!(payload["type"], "MONEY");
    assert_eq!(payload["date"], "2024-01-15T00:00:00Z");
    assert_eq!(payload["received_by"], "Local Mosque");
}

#[test]
fn empty_filters_produce_no_query() {
    assert_eq!(EntryFilters::default().to_query(), "");
    assert!(EntryFilters::default().is_empty());
}

#[test]
fn filters_serialize_in_fixed_order() {
    let filters = EntryFilters {
        start_date: Some("2024-01-01".to_owned()),
        end_date: Some("2024-01-31".to_owned()),
        kind: Some(SadqaType::Money),
        min_amount: Some(500.0),
    };
    assert_eq!(
        filters.to_query(),
        "?start_date=2024-01-01&end_date=2024-01-31&type=MONEY&min_amount=500"
    );
}

#[test]
fn identical_filters_produce_identical_queries() {
    let a = EntryFilters {
        kind: Some(SadqaType::Food),
        min_amount: Some(10.0),
        ..EntryFilters::default()
    };
    let b = a.clone();
    assert_eq!(a.to_query(), b.to_query());
}

#[test]
fn created_entry_round_trips_into_filter_range() {
    // Create → backend echo → retrieval under the canonical filter set.
    let payload = serde_json::to_value(NewEntry::from_draft(&draft())).unwrap();
    let mut stored = payload;
    stored["id"] = json!(1);
    stored["user_id"] = json!(1);
    let entry: SadqaEntry = serde_json::from_value(stored).unwrap();

    let filters = EntryFilters {
        start_date: Some("2024-01-01".to_owned()),
        end_date: Some("2024-01-31".to_owned()),
        kind: Some(SadqaType::Money),
        min_amount: Some(500.0),
    };
    assert_eq!(Some(entry.kind), filters.kind);
    assert!(entry.amount >= filters.min_amount.unwrap());
    let ymd = entry.date_ymd();
    assert!(filters.start_date.as_deref().unwrap() <= ymd);
    assert!(ymd <= filters.end_date.as_deref().unwrap());
}

#[test]
fn identity_profile_uses_provider_field_names() {
    let profile = IdentityProfile {
        external_id: "google-123".to_owned(),
        email: "user@example.com".to_owned(),
        name: Some("A. User".to_owned()),
        picture_url: Some("https://example.com/p.png".to_owned()),
    };
    assert_eq!(
        serde_json::to_value(&profile).unwrap(),
        json!({
            "sub": "google-123",
            "email": "user@example.com",
            "name": "A. User",
            "image": "https://example.com/p.png"
        })
    );
}

#[test]
fn backend_user_carries_the_session_token() {
    let user: BackendUser = serde_json::from_value(json!({
        "id": 3,
        "email": "user@example.com",
        "name": "A. User",
        "google_id": "google-123",
        "picture_url": null,
        "is_active": true,
        "is_verified": true,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z",
        "access_token": "h.p.s"
    }))
    .unwrap();
    assert_eq!(user.access_token.as_deref(), Some("h.p.s"));
    assert!(user.is_active);
}

#[test]
fn stats_deserialize_with_typed_most_frequent() {
    let stats: SadqaStats = serde_json::from_value(json!({
        "total_amount": 1000.0,
        "total_entries": 3,
        "monthly_amount": 500.0,
        "monthly_entries": 2,
        "most_frequent_type": "MONEY",
        "types_count": { "MONEY": 2, "FOOD": 1 }
    }))
    .unwrap();
    assert_eq!(stats.most_frequent_type, Some(SadqaType::Money));
    assert_eq!(stats.types_count.get("MONEY"), Some(&2));
}
