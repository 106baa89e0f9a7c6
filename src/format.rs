//! Offset and display formatting.
//!
//! Two offset renderings exist because two families of callers need them:
//! the timezone dropdowns show `UTC ±HH:MM`, while the combined session
//! strings append a compact `UTC±HHMM` suffix. Every display formatter
//! first shifts the stored instant into the caller-supplied offset before
//! extracting any field — the ambient system zone is never consulted.

use chrono::{DateTime, FixedOffset, Offset, Timelike, Utc};

/// Split a signed fractional hour offset into sign, whole hours, and
/// whole minutes, rounding the fractional part half-up to the nearest
/// minute. A zero offset carries a `+` sign.
fn split_offset_hours(offset_hours: f64) -> (char, u32, u32) {
    let sign = if offset_hours < 0.0 { '-' } else { '+' };
    let magnitude = offset_hours.abs();
    let hours = magnitude.trunc() as u32;
    let minutes = (magnitude.fract() * 60.0).round() as u32;
    (sign, hours, minutes)
}

/// Render a fractional hour offset as `UTC ±HH:MM`.
///
/// # Examples
///
/// ```
/// use session_time::format_time_zone_to_utc_offset;
///
/// assert_eq!(format_time_zone_to_utc_offset(-4.25), "UTC -04:15");
/// ```
pub fn format_time_zone_to_utc_offset(offset_hours: f64) -> String {
    let (sign, hours, minutes) = split_offset_hours(offset_hours);
    format!("UTC {sign}{hours:02}:{minutes:02}")
}

/// Render a fractional hour offset as a compact `±HHMM` suffix.
pub fn format_utc_offset_suffix(offset_hours: f64) -> String {
    let (sign, hours, minutes) = split_offset_hours(offset_hours);
    format!("{sign}{hours:02}{minutes:02}")
}

/// Shift an instant into the fixed zone implied by a fractional hour offset.
fn at_offset(instant: DateTime<Utc>, offset_hours: f64) -> DateTime<FixedOffset> {
    let (sign, hours, minutes) = split_offset_hours(offset_hours);
    let mut seconds = (hours * 3600 + minutes * 60) as i32;
    if sign == '-' {
        seconds = -seconds;
    }
    let offset = FixedOffset::east_opt(seconds).unwrap_or_else(|| Utc.fix());
    instant.with_timezone(&offset)
}

/// The 12-hour clock reading, with the literal `12:00 NOON` at exactly noon.
fn clock_12h(local: &DateTime<FixedOffset>) -> String {
    if local.hour() == 12 && local.minute() == 0 {
        "12:00 NOON".to_string()
    } else {
        local.format("%I:%M %p").to_string()
    }
}

/// Full session display string, e.g. `Wed, 30 Dec 2015, 12:00 NOON UTC+0000`.
pub fn format_date_time_for_sessions(instant: DateTime<Utc>, offset_hours: f64) -> String {
    let local = at_offset(instant, offset_hours);
    format!(
        "{}, {} UTC{}",
        local.format("%a, %d %b %Y"),
        clock_12h(&local),
        format_utc_offset_suffix(offset_hours)
    )
}

/// Session display string without the offset suffix,
/// e.g. `Wed, 30 Dec 2015, 12:00 NOON`.
pub fn format_time_12h(instant: DateTime<Utc>, offset_hours: f64) -> String {
    let local = at_offset(instant, offset_hours);
    format!("{}, {}", local.format("%a, %d %b %Y"), clock_12h(&local))
}

/// Compact dashboard summary string, e.g. `30 Dec 12:00 NOON`.
pub fn format_date_time_for_dashboard(instant: DateTime<Utc>, offset_hours: f64) -> String {
    let local = at_offset(instant, offset_hours);
    format!("{} {}", local.format("%d %b"), clock_12h(&local))
}

/// Plain `dd/MM/yyyy` date string, e.g. `30/12/2015`.
pub fn format_date(instant: DateTime<Utc>, offset_hours: f64) -> String {
    at_offset(instant, offset_hours).format("%d/%m/%Y").to_string()
}

// ── Tests ───────────────────────────────────────────────────────────────────
