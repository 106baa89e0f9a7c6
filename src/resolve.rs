//! Local date-time resolution against time-zone transition rules.
//!
//! A wall-clock reading plus a zone does not always pin down one instant:
//! a spring-forward transition leaves a range of local times that never
//! happen (a *gap*), and a fall-back transition makes a range happen twice
//! (an *overlap*). [`resolve_local_date_time`] classifies a
//! `(local date-time, zone)` pair into one of the three cases and produces
//! the corresponding instant(s), with a fixed resolution policy for the
//! two degenerate cases:
//!
//! - **Gap** — the local time is interpreted at the offset that was in
//!   effect before the transition, as if the clocks had not jumped.
//! - **Overlap** — both interpretations are reported, and the earlier
//!   instant (the pre-transition offset) is the nominal result.
//!
//! All inputs are explicit and all functions are pure; the historical
//! transition rules themselves come from the embedded IANA database
//! (`chrono-tz`), never from the system zone.

use std::str::FromStr;

use chrono::{DateTime, Duration, FixedOffset, LocalResult, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::error::TimeError;

/// Wall-clock pattern accepted by [`resolve_local_date_time`], e.g. `2021-03-01 10:00`.
pub const LOCAL_DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

// ── Zone identifiers ────────────────────────────────────────────────────────

/// A time zone a local date-time can be resolved in: either a named IANA
/// zone with full transition rules, or a fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneId {
    /// An IANA zone, e.g. `Asia/Singapore`.
    Named(Tz),
    /// A fixed offset from UTC, e.g. `+08:00` or the fractional `+05:45`.
    Fixed(FixedOffset),
}

impl FromStr for ZoneId {
    type Err = TimeError;

    /// Accepts an IANA zone name, a `±HH:MM` offset (optionally prefixed
    /// with `UTC`), or a plain hour count which may be fractional
    /// (`"5.75"` → +05:45).
    fn from_str(s: &str) -> Result<Self, TimeError> {
        if let Ok(tz) = s.parse::<Tz>() {
            return Ok(ZoneId::Named(tz));
        }

        let rest = s.strip_prefix("UTC").unwrap_or(s).trim();
        if let Ok(offset) = rest.parse::<FixedOffset>() {
            return Ok(ZoneId::Fixed(offset));
        }

        if let Ok(hours) = rest.parse::<f64>() {
            // "NaN"/"inf" parse as f64 but are not offsets.
            if hours.is_finite() {
                let seconds = (hours * 3600.0).round() as i32;
                if let Some(offset) = FixedOffset::east_opt(seconds) {
                    return Ok(ZoneId::Fixed(offset));
                }
            }
        }

        Err(TimeError::InvalidTimeZone(format!("'{s}'")))
    }
}

// ── Resolution results ──────────────────────────────────────────────────────

/// How many UTC offsets are valid for a local date-time in a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AmbiguityStatus {
    /// Exactly one valid offset.
    Unambiguous,
    /// No valid offset: the local time was skipped by a forward transition.
    Gap,
    /// Two valid offsets: the local time repeated across a backward transition.
    Overlap,
}

/// The instant(s) a local date-time resolves to in a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalResolution {
    /// The single instant of an unambiguous local time.
    Unambiguous(DateTime<Utc>),
    /// The projection of a non-existent local time through the
    /// pre-transition offset.
    Gap(DateTime<Utc>),
    /// Both interpretations of a repeated local time. `nominal` equals
    /// `earlier`, and `earlier < later` always holds.
    Overlap {
        nominal: DateTime<Utc>,
        earlier: DateTime<Utc>,
        later: DateTime<Utc>,
    },
}

impl LocalResolution {
    /// The classification of this resolution.
    pub fn status(&self) -> AmbiguityStatus {
        match self {
            LocalResolution::Unambiguous(_) => AmbiguityStatus::Unambiguous,
            LocalResolution::Gap(_) => AmbiguityStatus::Gap,
            LocalResolution::Overlap { .. } => AmbiguityStatus::Overlap,
        }
    }

    /// The single instant the zone's default policy selects.
    pub fn nominal_instant(&self) -> DateTime<Utc> {
        match self {
            LocalResolution::Unambiguous(instant) | LocalResolution::Gap(instant) => *instant,
            LocalResolution::Overlap { nominal, .. } => *nominal,
        }
    }
}

// ── Resolution ──────────────────────────────────────────────────────────────

/// Resolve a wall-clock date-time string under a zone identifier.
///
/// # Arguments
///
/// * `local_date_time` — A date-time in [`LOCAL_DATE_TIME_FORMAT`]
///   (`yyyy-MM-dd HH:mm`), e.g. `"2021-03-01 10:00"`
/// * `zone_id` — An IANA zone name or fixed offset (see [`ZoneId`])
///
/// # Errors
///
/// Returns [`TimeError::InvalidDateTime`] if the date-time string does not
/// match the pattern, or [`TimeError::InvalidTimeZone`] if the zone
/// identifier is unknown.
///
/// # Examples
///
/// ```
/// use session_time::{resolve_local_date_time, LocalResolution};
///
/// let resolved = resolve_local_date_time("2021-03-01 10:00", "+08:00").unwrap();
/// assert!(matches!(resolved, LocalResolution::Unambiguous(_)));
/// ```
pub fn resolve_local_date_time(
    local_date_time: &str,
    zone_id: &str,
) -> Result<LocalResolution, TimeError> {
    let naive = parse_local_date_time(local_date_time)?;
    let zone: ZoneId = zone_id.parse()?;

    Ok(match zone {
        ZoneId::Named(tz) => resolve_in_zone(naive, &tz),
        ZoneId::Fixed(offset) => resolve_in_zone(naive, &offset),
    })
}

/// Parse a wall-clock string against the fixed [`LOCAL_DATE_TIME_FORMAT`].
pub fn parse_local_date_time(s: &str) -> Result<NaiveDateTime, TimeError> {
    NaiveDateTime::parse_from_str(s, LOCAL_DATE_TIME_FORMAT)
        .map_err(|e| TimeError::InvalidDateTime(format!("'{s}': {e}")))
}

/// Classify a naive local date-time against a zone's transition rules.
fn resolve_in_zone<Z: TimeZone>(naive: NaiveDateTime, zone: &Z) -> LocalResolution {
    match zone.from_local_datetime(&naive) {
        LocalResult::Single(resolved) => {
            LocalResolution::Unambiguous(resolved.with_timezone(&Utc))
        }
        LocalResult::Ambiguous(earliest, latest) => {
            let earlier = earliest.with_timezone(&Utc);
            let later = latest.with_timezone(&Utc);
            LocalResolution::Overlap {
                nominal: earlier,
                earlier,
                later,
            }
        }
        LocalResult::None => {
            // Gap. The pre-transition offset is what the zone used a day
            // earlier: real transitions are months apart and gaps are at
            // most an hour or two wide, so a 24h probe always lands on
            // the pre-transition side.
            let before = zone
                .offset_from_utc_datetime(&(naive - Duration::hours(24)))
                .fix();
            LocalResolution::Gap(Utc.from_utc_datetime(&(naive - before)))
        }
    }
}

// ── Wire projection ─────────────────────────────────────────────────────────

/// Serializable projection of a resolution for the action layer's JSON
/// contract. All timestamps are milliseconds since the UTC epoch;
/// `local_date_time` echoes the requested wall-clock reading rendered as
/// if it were UTC, and `resolved_date_time` is the nominal instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalDateTimeInfo {
    pub status: AmbiguityStatus,
    pub local_date_time: i64,
    pub resolved_date_time: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earlier_interpretation_date_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub later_interpretation_date_time: Option<i64>,
}

impl LocalDateTimeInfo {
    /// Build the wire projection from a requested wall-clock reading and
    /// its resolution.
    pub fn of(requested: NaiveDateTime, resolution: &LocalResolution) -> Self {
        let (earlier, later) = match resolution {
            LocalResolution::Overlap { earlier, later, .. } => {
                (Some(earlier.timestamp_millis()), Some(later.timestamp_millis()))
            }
            _ => (None, None),
        };

        LocalDateTimeInfo {
            status: resolution.status(),
            local_date_time: requested.and_utc().timestamp_millis(),
            resolved_date_time: resolution.nominal_instant().timestamp_millis(),
            earlier_interpretation_date_time: earlier,
            later_interpretation_date_time: later,
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
