use super::*;

#[test]
fn small_amounts_have_no_grouping() {
    assert_eq!(format_inr(0.0), "₹0");
    assert_eq!(format_inr(500.0), "₹500");
}

#[test]
fn indian_grouping_splits_twos_after_first_three() {
    assert_eq!(format_inr(1_000.0), "₹1,000");
    assert_eq!(format_inr(123_456.0), "₹1,23,456");
    assert_eq!(format_inr(1_234_567.0), "₹12,34,567");
    assert_eq!(format_inr(10_000_000.0), "₹1,00,00,000");
}

#[test]
fn fractions_round_to_whole_rupees() {
    assert_eq!(format_inr(499.6), "₹500");
    assert_eq!(format_inr(499.4), "₹499");
}

#[test]
fn negative_amounts_keep_the_sign() {
    assert_eq!(format_inr(-250.0), "-₹250");
}

#[test]
fn display_date_renders_month_names() {
    assert_eq!(display_date("2024-01-15"), "January 15, 2024");
    assert_eq!(display_date("2023-12-01"), "December 1, 2023");
}

#[test]
fn display_date_accepts_full_timestamps() {
    assert_eq!(display_date("2024-01-15T00:00:00Z"), "January 15, 2024");
}

#[test]
fn display_date_falls_back_on_garbage() {
    assert_eq!(display_date("gift-day"), "gift-day");
    assert_eq!(display_date("2024-13-01"), "2024-13-01");
}
