//! Wall-clock access.
//!
//! In the browser this reads the JS `Date`; on the host it falls back to
//! the system clock so the same code paths compile natively for tests.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Current time in whole seconds since the Unix epoch.
#[allow(clippy::cast_possible_truncation)]
pub fn now_secs() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        (js_sys::Date::now() / 1000.0) as i64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
    }
}

/// Today's local calendar date as `YYYY-MM-DD`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn today() -> String {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new_0();
        format!(
            "{:04}-{:02}-{:02}",
            date.get_full_year() as i64,
            date.get_month() as u32 + 1,
            date.get_date() as u32
        )
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let (year, month, day) = civil_from_days(now_secs().div_euclid(86_400));
        format!("{year:04}-{month:02}-{day:02}")
    }
}

/// Convert days since 1970-01-01 to a (year, month, day) civil date.
/// Proleptic Gregorian; valid far beyond any date this app will see.
#[cfg(not(feature = "hydrate"))]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let year = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = if month <= 2 { year + 1 } else { year };
    (year, month as u32, day as u32)
}
