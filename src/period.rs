//! Submission-window containment checks.

use chrono::{DateTime, Utc};

/// Whether `time` lies within the `[start, end]` window, with each
/// boundary independently strict or inclusive.
///
/// An absent `start`, `end`, or `time` means the window is undefined and
/// the answer is `false` unconditionally — there is no partial or
/// unbounded containment.
pub fn is_time_within_period(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    time: Option<DateTime<Utc>>,
    start_inclusive: bool,
    end_inclusive: bool,
) -> bool {
    let (Some(start), Some(end), Some(time)) = (start, end, time) else {
        return false;
    };

    let after_start = if start_inclusive {
        time >= start
    } else {
        time > start
    };
    let before_end = if end_inclusive {
        time <= end
    } else {
        time < end
    };

    after_start && before_end
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use proptest::prelude::*;

    fn window() -> (DateTime<Utc>, DateTime<Utc>) {
        let start = Utc.with_ymd_and_hms(2021, 6, 1, 0, 0, 0).unwrap();
        (start, start + Duration::days(10))
    }

    #[test]
    fn test_time_strictly_inside() {
        let (start, end) = window();
        let time = Some(start + Duration::days(5));

        assert!(is_time_within_period(Some(start), Some(end), time, true, true));
        assert!(is_time_within_period(Some(start), Some(end), time, true, false));
        assert!(is_time_within_period(Some(start), Some(end), time, false, true));
        assert!(is_time_within_period(Some(start), Some(end), time, false, false));
    }

    #[test]
    fn test_time_on_start_boundary() {
        let (start, end) = window();
        let time = Some(start);

        assert!(is_time_within_period(Some(start), Some(end), time, true, true));
        assert!(is_time_within_period(Some(start), Some(end), time, true, false));
        assert!(!is_time_within_period(Some(start), Some(end), time, false, true));
        assert!(!is_time_within_period(Some(start), Some(end), time, false, false));
    }

    #[test]
    fn test_time_before_start() {
        let (start, end) = window();
        let time = Some(start - Duration::days(10));

        assert!(!is_time_within_period(Some(start), Some(end), time, true, true));
        assert!(!is_time_within_period(Some(start), Some(end), time, true, false));
        assert!(!is_time_within_period(Some(start), Some(end), time, false, true));
        assert!(!is_time_within_period(Some(start), Some(end), time, false, false));
    }

    #[test]
    fn test_time_on_end_boundary() {
        let (start, end) = window();
        let time = Some(end);

        assert!(is_time_within_period(Some(start), Some(end), time, true, true));
        assert!(!is_time_within_period(Some(start), Some(end), time, true, false));
        assert!(is_time_within_period(Some(start), Some(end), time, false, true));
        assert!(!is_time_within_period(Some(start), Some(end), time, false, false));
    }

    #[test]
    fn test_time_after_end() {
        let (start, end) = window();
        let time = Some(end + Duration::days(10));

        assert!(!is_time_within_period(Some(start), Some(end), time, true, true));
        assert!(!is_time_within_period(Some(start), Some(end), time, true, false));
        assert!(!is_time_within_period(Some(start), Some(end), time, false, true));
        assert!(!is_time_within_period(Some(start), Some(end), time, false, false));
    }

    #[test]
    fn test_absent_operands_are_never_contained() {
        let (start, end) = window();
        let time = Some(start + Duration::days(5));

        for start_inclusive in [true, false] {
            for end_inclusive in [true, false] {
                assert!(!is_time_within_period(
                    None, Some(end), time, start_inclusive, end_inclusive
                ));
                assert!(!is_time_within_period(
                    Some(start), None, time, start_inclusive, end_inclusive
                ));
                assert!(!is_time_within_period(
                    Some(start), Some(end), None, start_inclusive, end_inclusive
                ));
            }
        }
    }

    proptest! {
        #[test]
        fn prop_containment_implies_ordering(
            start_secs in 0i64..500_000_000,
            len_secs in 0i64..500_000_000,
            time_secs in 0i64..1_000_000_000,
            start_inclusive: bool,
            end_inclusive: bool,
        ) {
            let start = Utc.timestamp_opt(start_secs, 0).unwrap();
            let end = Utc.timestamp_opt(start_secs + len_secs, 0).unwrap();
            let time = Utc.timestamp_opt(time_secs, 0).unwrap();

            let within = is_time_within_period(
                Some(start), Some(end), Some(time), start_inclusive, end_inclusive,
            );
            if within {
                prop_assert!(time >= start && time <= end);
            }
            // Strictly inside is contained under every flag combination.
            if time > start && time < end {
                prop_assert!(within);
            }
        }
    }
}
