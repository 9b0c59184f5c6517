//! Display formatting for amounts and dates.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Format an amount as whole rupees with Indian digit grouping,
/// e.g. `1234567` → `₹12,34,567`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_inr(amount: f64) -> String {
    let negative = amount < 0.0;
    let value = amount.abs().round() as u64;
    let digits = value.to_string();

    // Indian grouping: the last three digits form one group, everything
    // before that groups in twos.
    let (head, tail) = if digits.len() > 3 {
        digits.split_at(digits.len() - 3)
    } else {
        ("", digits.as_str())
    };

    let mut groups: Vec<&str> = Vec::new();
    let mut rest = head;
    while !rest.is_empty() {
        let cut = rest.len().saturating_sub(2);
        groups.push(&rest[cut..]);
        rest = &rest[..cut];
    }
    groups.reverse();
    groups.push(tail);

    let body = groups.join(",");
    if negative {
        format!("-₹{body}")
    } else {
        format!("₹{body}")
    }
}

/// Render a `YYYY-MM-DD` date (or the date prefix of a full timestamp)
/// as e.g. `January 15, 2024`. Falls back to the raw input when it does
/// not look like a calendar date.
pub fn display_date(date: &str) -> String {
    let ymd = date.get(..10).unwrap_or(date);
    let mut parts = ymd.split('-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return date.to_owned();
    };
    let (Ok(month), Ok(day)) = (month.parse::<usize>(), day.parse::<u32>()) else {
        return date.to_owned();
    };
    match MONTHS.get(month.wrapping_sub(1)) {
        Some(name) => format!("{name} {day}, {year}"),
        None => date.to_owned(),
    }
}
