//! Building normalized date-times from form inputs.
//!
//! Session forms submit a calendar date and an hour count as two separate
//! free-text fields; [`combine_date_time`] merges them into one value.
//! Invalid input is reported as `None` with no reason attached — callers
//! only need to know that the combination failed, and the action layer
//! treats the absence as a validation failure. This is deliberately a
//! weaker contract than the resolver's error enum.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Timelike, Utc};

/// Date pattern accepted by [`combine_date_time`], e.g. `01/02/2013`.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Merge a `dd/MM/yyyy` date and an hour count in `0..=24` into a local
/// date-time.
///
/// The hour must be a plain non-negative integer; `0` maps to `00:00` and
/// `24` clamps to `23:59` of the *same* date rather than rolling over to
/// midnight of the next day. Any absent, non-integer, out-of-range, or
/// unparsable input (including impossible calendar dates) yields `None`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use session_time::combine_date_time;
///
/// let expected = NaiveDate::from_ymd_opt(2013, 2, 1).unwrap().and_hms_opt(23, 59, 0);
/// assert_eq!(combine_date_time(Some("01/02/2013"), Some("24")), expected);
/// assert_eq!(combine_date_time(Some("01/02/2013"), Some("5.5")), None);
/// ```
pub fn combine_date_time(date: Option<&str>, time: Option<&str>) -> Option<NaiveDateTime> {
    let hour: u32 = time?.parse().ok()?;
    if hour > 24 {
        return None;
    }

    let date = NaiveDate::parse_from_str(date?, DATE_FORMAT).ok()?;

    if hour == 24 {
        date.and_hms_opt(23, 59, 0)
    } else {
        date.and_hms_opt(hour, 0, 0)
    }
}

/// Round an instant up to the next UTC hour boundary.
///
/// An instant already on the hour still advances a full hour, so the
/// result is always strictly later than the input.
pub fn next_hour_from(instant: DateTime<Utc>) -> DateTime<Utc> {
    let truncated = instant
        .with_minute(0)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(instant);
    truncated + Duration::hours(1)
}

// ── Tests ───────────────────────────────────────────────────────────────────
