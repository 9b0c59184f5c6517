use super::*;

#[test]
fn epoch_is_january_first_1970() {
    assert_eq!(civil_from_days(0), (1970, 1, 1));
}

#[test]
fn known_dates_convert() {
    assert_eq!(civil_from_days(19_737), (2024, 1, 15));
    assert_eq!(civil_from_days(10_957), (2000, 1, 1));
}

#[test]
fn leap_day_and_march_rollover() {
    assert_eq!(civil_from_days(11_016), (2000, 2, 29));
    assert_eq!(civil_from_days(11_017), (2000, 3, 1));
}

#[test]
fn today_is_a_calendar_date() {
    let today = today();
    assert_eq!(today.len(), 10);
    assert_eq!(today.as_bytes()[4], b'-');
    assert_eq!(today.as_bytes()[7], b'-');
}

#[test]
fn now_is_after_2020() {
    assert!(now_secs() > 1_600_000_000);
}
