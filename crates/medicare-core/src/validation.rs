//! Shape checks for user-entered dates, times and emails.
//!
//! The store itself trusts its input; callers run these before building a
//! create or update payload.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;

static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date pattern"));

static TIME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01]?[0-9]|2[0-3]):([0-5][0-9])$").expect("valid time pattern"));

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// `YYYY-MM-DD` naming a real calendar day (2024-02-30 is rejected).
pub fn is_valid_date(value: &str) -> bool {
    parse_date(value).is_some()
}

/// `H:MM` or `HH:MM` on a 24-hour clock.
pub fn is_valid_time(value: &str) -> bool {
    TIME_PATTERN.is_match(value)
}

/// Coarse `local@domain.tld` check with no whitespace anywhere.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Parse a date that passes [`is_valid_date`].
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if !DATE_PATTERN.is_match(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Parse a time that passes [`is_valid_time`].
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    let captures = TIME_PATTERN.captures(value)?;
    let hour = captures[1].parse().ok()?;
    let minute = captures[2].parse().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_valid_dates() {
        assert!(is_valid_date("2024-03-15"));
        assert!(is_valid_date("2024-02-29"));
        assert!(is_valid_date("0001-01-01"));
    }

    #[test]
    fn test_invalid_dates() {
        assert!(!is_valid_date("2024-02-30"));
        assert!(!is_valid_date("2023-02-29"));
        assert!(!is_valid_date("2024-13-01"));
        assert!(!is_valid_date("2024-3-15"));
        assert!(!is_valid_date("15/03/2024"));
        assert!(!is_valid_date(" 2024-03-15"));
        assert!(!is_valid_date("2024-03-15T10:00"));
        assert!(!is_valid_date(""));
    }

    #[test]
    fn test_times() {
        for ok in ["0:00", "9:05", "09:05", "19:59", "23:59"] {
            assert!(is_valid_time(ok), "{ok} should be valid");
        }
        for bad in ["24:00", "12:60", "7:5", "123:00", "12:00:00", "noon", ""] {
            assert!(!is_valid_time(bad), "{bad} should be invalid");
        }
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time("9:05"), NaiveTime::from_hms_opt(9, 5, 0));
        assert_eq!(parse_time("23:59"), NaiveTime::from_hms_opt(23, 59, 0));
        assert_eq!(parse_time("24:00"), None);
    }

    #[test]
    fn test_emails() {
        assert!(is_valid_email("juan.perez@email.com"));
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("juan.perez@email"));
        assert!(!is_valid_email("juan perez@email.com"));
        assert!(!is_valid_email("@email.com"));
        assert!(!is_valid_email("juan@@email.com"));
        assert!(!is_valid_email("juan@.com"));
        assert!(!is_valid_email(""));
    }

    proptest! {
        #[test]
        fn prop_formatted_dates_are_valid(days in 0i64..3_000_000) {
            let date = NaiveDate::from_ymd_opt(1, 1, 1).unwrap() + chrono::Duration::days(days);
            let text = date.format("%Y-%m-%d").to_string();
            prop_assume!(text.len() == 10);
            prop_assert!(is_valid_date(&text));
            prop_assert_eq!(parse_date(&text), Some(date));
        }

        #[test]
        fn prop_clock_times_are_valid(hour in 0u32..24, minute in 0u32..60) {
            let padded = format!("{hour:02}:{minute:02}");
            let unpadded = format!("{hour}:{minute:02}");
            prop_assert!(is_valid_time(&padded));
            prop_assert!(is_valid_time(&unpadded));
            prop_assert_eq!(parse_time(&padded), NaiveTime::from_hms_opt(hour, minute, 0));
        }

        #[test]
        fn prop_out_of_range_hours_are_invalid(hour in 24u32..100, minute in 0u32..60) {
            let text = format!("{hour}:{minute:02}");
            prop_assert!(!is_valid_time(&text));
        }

        #[test]
        fn prop_whitespace_breaks_emails(local in "[a-z]{1,8}", domain in "[a-z]{1,8}") {
            let email = format!("{local}@{domain}.com");
            prop_assert!(is_valid_email(&email));
            let spaced = format!("{local} @{domain}.com");
            prop_assert!(!is_valid_email(&spaced));
        }
    }
}
