//! Recency codes: how many days ago a listing was posted.
//!
//! A recency code is the signed day offset between a posting date and "now",
//! rendered at a fixed width so the board can show it in a single column:
//! `"000"` for today, `"007"` for a week ago, `"-001"` for tomorrow. Codes that
//! cannot be computed become [`SENTINEL`], which sorts after every normal code.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use snafu::prelude::*;
use tracing::{debug, warn};

use crate::error::{InvalidDateSnafu, RecencyError, SignedDateSnafu};

/// Code shown when the posting date is missing or malformed.
pub const SENTINEL: &str = "999";

/// Numeric value of [`SENTINEL`]; also the sort key for unparseable codes.
pub const SENTINEL_DAYS: i64 = 999;

/// Accepted posting date format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a posting date in `YYYY-MM-DD` form.
///
/// The year must start with a digit; `%Y` alone would accept `+2023-09-10`.
pub fn parse_date(value: &str) -> Result<NaiveDate, RecencyError> {
    ensure!(
        value.as_bytes().first().is_some_and(u8::is_ascii_digit),
        SignedDateSnafu { value }
    );
    NaiveDate::parse_from_str(value, DATE_FORMAT).context(InvalidDateSnafu { value })
}

/// Whole days elapsed between midnight of `value` and `now`, rounded down.
///
/// `now` keeps its time of day, so a date one day ahead of `now` gives `-1`
/// rather than `0`.
pub fn days_since(value: &str, now: NaiveDateTime) -> Result<i64, RecencyError> {
    let posted = parse_date(value)?.and_time(NaiveTime::MIN);
    let elapsed = now.signed_duration_since(posted);
    // num_days truncates toward zero; step down for a partial negative day.
    let days = elapsed.num_days();
    if elapsed < TimeDelta::days(days) {
        Ok(days - 1)
    } else {
        Ok(days)
    }
}

/// Render a day count as a zero-padded code.
///
/// Magnitudes of 1000 or more keep their full width.
pub fn format_days(days: i64) -> String {
    if days < 0 {
        format!("-{:03}", days.unsigned_abs())
    } else {
        format!("{days:03}")
    }
}

/// Compute the display code for an optional posting date, falling back to
/// [`SENTINEL`] on any failure.
pub fn recency_code(value: Option<&str>, now: NaiveDateTime) -> String {
    let Some(value) = value else {
        warn!(stage = "recency", "Missing posting date, using sentinel");
        return SENTINEL.to_string();
    };

    match days_since(value, now) {
        Ok(days) => {
            debug!(stage = "recency", date_posted = value, days, "Computed days since posting");
            format_days(days)
        }
        Err(e) => {
            warn!(stage = "recency", error = %e, "Unparseable posting date, using sentinel");
            SENTINEL.to_string()
        }
    }
}

/// Numeric sort key of a code; anything unparseable sorts as [`SENTINEL_DAYS`].
pub fn sort_key(code: &str) -> i64 {
    code.parse().unwrap_or(SENTINEL_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(date: &str, hour: u32, minute: u32) -> NaiveDateTime {
        parse_date(date)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_same_day_is_zero() {
        let now = at("2023-09-10", 14, 30);
        assert_eq!(days_since("2023-09-10", now).unwrap(), 0);
        assert_eq!(recency_code(Some("2023-09-10"), now), "000");
    }

    #[test]
    fn test_midnight_same_day_is_zero() {
        let now = at("2023-09-10", 0, 0);
        assert_eq!(days_since("2023-09-10", now).unwrap(), 0);
    }

    #[test]
    fn test_tomorrow_is_minus_one() {
        let now = at("2023-09-10", 14, 30);
        assert_eq!(days_since("2023-09-11", now).unwrap(), -1);
        assert_eq!(recency_code(Some("2023-09-11"), now), "-001");
    }

    #[test]
    fn test_partial_second_before_midnight_rounds_down() {
        let now = parse_date("2023-09-09")
            .unwrap()
            .and_hms_milli_opt(23, 59, 59, 500)
            .unwrap();
        assert_eq!(days_since("2023-09-09", now).unwrap(), 0);
        assert_eq!(days_since("2023-09-10", now).unwrap(), -1);
        assert_eq!(days_since("2023-09-11", now).unwrap(), -2);
        assert_eq!(recency_code(Some("2023-09-10"), now), "-001");
    }

    #[test]
    fn test_past_date_with_fraction_keeps_whole_days() {
        let now = parse_date("2023-09-10")
            .unwrap()
            .and_hms_nano_opt(0, 0, 0, 1)
            .unwrap();
        assert_eq!(days_since("2023-09-10", now).unwrap(), 0);
        assert_eq!(days_since("2023-09-09", now).unwrap(), 1);
    }

    #[test]
    fn test_future_dates_are_signed_not_clipped() {
        let now = at("2023-09-10", 9, 0);
        assert_eq!(recency_code(Some("2023-09-15"), now), "-005");
        assert_eq!(recency_code(Some("2023-12-19"), now), "-100");
    }

    #[test]
    fn test_past_dates_are_padded_and_monotonic() {
        let now = at("2023-09-10", 23, 59);
        let dates = [
            "2023-09-10",
            "2023-09-03",
            "2023-08-15",
            "2023-01-01",
            "2021-06-30",
        ];

        let mut previous = -1;
        for date in dates {
            let days = days_since(date, now).unwrap();
            assert!(days > previous, "{date} should be older than the previous date");
            previous = days;

            let code = format_days(days);
            assert!(!code.starts_with('-'));
            assert!(code.len() >= 3, "{code} should be at least three digits");
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
        assert_eq!(recency_code(Some("2023-09-03"), now), "007");
    }

    #[test]
    fn test_format_days() {
        assert_eq!(format_days(0), "000");
        assert_eq!(format_days(7), "007");
        assert_eq!(format_days(42), "042");
        assert_eq!(format_days(-5), "-005");
        assert_eq!(format_days(1234), "1234");
        assert_eq!(format_days(-1234), "-1234");
    }

    #[test]
    fn test_malformed_dates_use_sentinel() {
        let now = at("2023-09-10", 12, 0);
        for value in ["not-a-date", "", "2023/09/10", "2023-13-01", "2023-09-10 "] {
            assert!(days_since(value, now).is_err(), "{value:?} should not parse");
            assert_eq!(recency_code(Some(value), now), SENTINEL);
        }
        assert_eq!(recency_code(None, now), SENTINEL);
    }

    #[test]
    fn test_signed_year_is_rejected() {
        let now = at("2023-09-10", 12, 0);
        for value in ["+2023-09-10", "-2023-09-10", " 2023-09-10"] {
            assert!(parse_date(value).is_err(), "{value:?} should not parse");
            assert_eq!(recency_code(Some(value), now), SENTINEL);
        }
    }

    #[test]
    fn test_sort_key() {
        assert_eq!(sort_key("-001"), -1);
        assert_eq!(sort_key("000"), 0);
        assert_eq!(sort_key("007"), 7);
        assert_eq!(sort_key("1234"), 1234);
        assert_eq!(sort_key(SENTINEL), SENTINEL_DAYS);
        assert_eq!(sort_key("Today"), SENTINEL_DAYS);
    }
}
