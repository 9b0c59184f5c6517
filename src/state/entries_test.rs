use super::*;
use crate::net::types::midnight_timestamp;

fn entry(id: i64, kind: SadqaType, amount: f64, date: &str) -> SadqaEntry {
    SadqaEntry {
        id,
        user_id: 1,
        kind,
        amount,
        reason: None,
        received_by: "Local Mosque".to_owned(),
        date: midnight_timestamp(date),
        notes: None,
        created_at: String::new(),
        updated_at: String::new(),
    }
}

#[test]
fn month_key_is_the_year_month_prefix() {
    assert_eq!(month_key("2024-02-03"), "2024-02");
    assert_eq!(month_key("2024-02-03T00:00:00Z"), "2024-02");
    assert_eq!(month_key("2024"), "2024");
}

#[test]
fn recent_takes_the_tail_newest_first() {
    let items = vec![
        entry(1, SadqaType::Money, 10.0, "2024-01-01"),
        entry(2, SadqaType::Money, 20.0, "2024-01-02"),
        entry(3, SadqaType::Money, 30.0, "2024-01-03"),
        entry(4, SadqaType::Money, 40.0, "2024-01-04"),
    ];
    let ids: Vec<i64> = recent(&items, 3).into_iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![4, 3, 2]);
}

#[test]
fn computed_stats_aggregate_totals_month_and_frequency() {
    let items = vec![
        entry(1, SadqaType::Money, 500.0, "2024-01-15"),
        entry(2, SadqaType::Food, 200.0, "2024-02-03"),
        entry(3, SadqaType::Money, 300.0, "2024-02-10"),
    ];
    let stats = computed_stats(&items, "2024-02");
    assert_eq!(stats.total_amount, 1000.0);
    assert_eq!(stats.total_entries, 3);
    assert_eq!(stats.monthly_amount, 500.0);
    assert_eq!(stats.monthly_entries, 2);
    assert_eq!(stats.most_frequent_type, Some(SadqaType::Money));
    assert_eq!(stats.types_count.get("MONEY"), Some(&2));
    assert_eq!(stats.types_count.get("FOOD"), Some(&1));
}

#[test]
fn computed_stats_on_empty_cache() {
    let stats = computed_stats(&[], "2024-02");
    assert_eq!(stats.total_amount, 0.0);
    assert_eq!(stats.most_frequent_type, None);
    assert!(stats.types_count.is_empty());
}

#[test]
fn frequency_ties_resolve_in_declaration_order() {
    let items = vec![
        entry(1, SadqaType::Clothes, 10.0, "2024-01-01"),
        entry(2, SadqaType::Money, 10.0, "2024-01-02"),
    ];
    let stats = computed_stats(&items, "2024-01");
    assert_eq!(stats.most_frequent_type, Some(SadqaType::Money));
}

#[test]
fn client_and_backend_stats_agree_on_the_same_entry_set() {
    let items = vec![
        entry(1, SadqaType::Money, 500.0, "2024-01-15"),
        entry(2, SadqaType::Food, 200.0, "2024-02-03"),
        entry(3, SadqaType::Money, 300.0, "2024-02-10"),
    ];
    // What the backend would report for these rows in February 2024.
    let backend = SadqaStats {
        total_amount: 1000.0,
        total_entries: 3,
        monthly_amount: 500.0,
        monthly_entries: 2,
        most_frequent_type: Some(SadqaType::Money),
        types_count: [("MONEY".to_owned(), 2), ("FOOD".to_owned(), 1)]
            .into_iter()
            .collect(),
    };
    assert_eq!(computed_stats(&items, "2024-02"), backend);
}

#[test]
fn display_stats_prefers_the_backend_value() {
    let backend = SadqaStats {
        total_amount: 4_242.0,
        ..SadqaStats::default()
    };
    let state = EntriesState {
        items: vec![entry(1, SadqaType::Money, 1.0, "2024-01-01")],
        stats: Some(backend.clone()),
        ..EntriesState::default()
    };
    assert_eq!(state.display_stats(), backend);
}

#[test]
fn operations_fail_fast_without_a_valid_token() {
    let signed_out = AuthState::default();
    assert_eq!(ensure_token(&signed_out), Err(ApiError::Unauthenticated));

    let valid = AuthState {
        token_valid: true,
        ..AuthState::default()
    };
    assert_eq!(ensure_token(&valid), Ok(()));
}
