//! # session-time
//!
//! Timezone-aware scheduling core for a student feedback platform.
//!
//! Feedback sessions are defined by wall-clock readings in a course's
//! time zone, while everything stored and compared is an absolute UTC
//! instant. This crate owns the conversion between the two and the small
//! set of derived operations the web layer needs: resolving a local
//! date-time against historical DST rules (including the skipped and
//! repeated readings around transitions), normalizing two-field form
//! input into a date-time, checking whether an instant falls inside a
//! submission window, and rendering offsets and session strings for
//! display.
//!
//! All functions are pure and take explicit inputs — no system clock,
//! no ambient time zone. The IANA rule database is embedded via
//! `chrono-tz`, so resolution is deterministic for a given rule set.
//!
//! ## Modules
//!
//! - [`resolve`] — Classify a (local date-time, zone) pair as unambiguous, gap, or overlap and produce its instant(s)
//! - [`combine`] — Merge date and hour-count form fields into a normalized date-time
//! - [`period`] — Submission-window containment checks
//! - [`format`] — UTC-offset and session display formatting
//! - [`error`] — Error types

pub mod combine;
pub mod error;
pub mod format;
pub mod period;
pub mod resolve;

pub use combine::{combine_date_time, next_hour_from, DATE_FORMAT};
pub use error::TimeError;
pub use format::{
    format_date, format_date_time_for_dashboard, format_date_time_for_sessions, format_time_12h,
    format_time_zone_to_utc_offset, format_utc_offset_suffix,
};
pub use period::is_time_within_period;
pub use resolve::{
    parse_local_date_time, resolve_local_date_time, AmbiguityStatus, LocalDateTimeInfo,
    LocalResolution, ZoneId, LOCAL_DATE_TIME_FORMAT,
};
