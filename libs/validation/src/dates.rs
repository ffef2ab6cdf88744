//! Birth date helpers: birthday detection and age calculation.

use chrono::{Datelike, NaiveDate};

/// Strict `YYYY-MM-DD` parse.
pub fn parse_birth_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Leading unsigned integer of `s`, ignoring anything after the digits.
fn leading_u32(s: &str) -> Option<u32> {
    let s = s.trim_start();
    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(s.len(), |(i, _)| i);
    s[..end].parse().ok()
}

/// Whether `reference` falls on the birthday encoded in `birth_date`.
///
/// Only month and day are compared; the year component is not inspected, so
/// anything shaped like `YYYY-MM-DD` works. Malformed input returns `false`.
pub fn is_birthday_today(birth_date: &str, reference: NaiveDate) -> bool {
    let parts: Vec<&str> = birth_date.split('-').collect();
    if parts.len() != 3 {
        return false;
    }

    match (leading_u32(parts[1]), leading_u32(parts[2])) {
        (Some(month), Some(day)) => reference.month() == month && reference.day() == day,
        _ => false,
    }
}

/// Whole years elapsed between `birth_date` and `reference`.
///
/// Returns `None` when `birth_date` is not a valid `YYYY-MM-DD` date. A birth
/// date after `reference` yields a negative age.
pub fn calculate_age(birth_date: &str, reference: NaiveDate) -> Option<i32> {
    let birth = parse_birth_date(birth_date)?;
    let mut age = reference.year() - birth.year();
    if (reference.month(), reference.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    Some(age)
}
