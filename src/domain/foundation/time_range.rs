//! Half-open time interval value object.
//!
//! All reservations are scheduled over `[start, end)` ranges. The half-open
//! convention means back-to-back bookings (one ending exactly when the next
//! starts) never conflict.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Timestamp, ValidationError};

/// Half-open time interval `[start, end)` with `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    start: Timestamp,
    end: Timestamp,
}

impl TimeRange {
    /// Creates a time range, validating that `start < end`.
    ///
    /// Zero-length and inverted ranges are rejected.
    pub fn new(start: Timestamp, end: Timestamp) -> Result<Self, ValidationError> {
        if !start.is_before(&end) {
            return Err(ValidationError::invalid_format(
                "time_range",
                format!("start ({start:?}) must be strictly before end ({end:?})"),
            ));
        }
        Ok(Self { start, end })
    }

    /// Inclusive start of the range.
    pub fn start(&self) -> Timestamp {
        self.start
    }

    /// Exclusive end of the range.
    pub fn end(&self) -> Timestamp {
        self.end
    }

    /// Returns true if the two ranges share any instant.
    ///
    /// Two half-open ranges `[a1,a2)` and `[b1,b2)` overlap iff
    /// `a1 < b2 && b1 < a2`. Adjacent ranges (`a2 == b1`) do not overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start.is_before(&other.end) && other.start.is_before(&self.end)
    }

    /// Returns true if the given instant falls within `[start, end)`.
    pub fn contains(&self, instant: &Timestamp) -> bool {
        !instant.is_before(&self.start) && instant.is_before(&self.end)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {})",
            self.start.as_datetime().to_rfc3339(),
            self.end.as_datetime().to_rfc3339()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use proptest::prelude::*;

    // Fixed base so hour offsets compare exactly.
    fn base() -> Timestamp {
        let dt = DateTime::parse_from_rfc3339("2026-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        Timestamp::from_datetime(dt)
    }

    fn range(start_h: i64, end_h: i64) -> TimeRange {
        TimeRange::new(base().plus_hours(start_h), base().plus_hours(end_h)).unwrap()
    }

    #[test]
    fn new_rejects_inverted_range() {
        let now = Timestamp::now();
        let result = TimeRange::new(now.plus_hours(2), now.plus_hours(1));
        assert!(result.is_err());
    }

    #[test]
    fn new_rejects_zero_length_range() {
        let now = Timestamp::now();
        let result = TimeRange::new(now, now);
        assert!(result.is_err());
    }

    #[test]
    fn overlapping_ranges_overlap() {
        assert!(range(0, 2).overlaps(&range(1, 3)));
        assert!(range(1, 3).overlaps(&range(0, 2)));
    }

    #[test]
    fn contained_range_overlaps() {
        assert!(range(0, 4).overlaps(&range(1, 2)));
        assert!(range(1, 2).overlaps(&range(0, 4)));
    }

    #[test]
    fn identical_ranges_overlap() {
        assert!(range(0, 2).overlaps(&range(0, 2)));
    }

    #[test]
    fn adjacent_ranges_do_not_overlap() {
        // Back-to-back bookings are allowed.
        assert!(!range(0, 2).overlaps(&range(2, 4)));
        assert!(!range(2, 4).overlaps(&range(0, 2)));
    }

    #[test]
    fn disjoint_ranges_do_not_overlap() {
        assert!(!range(0, 1).overlaps(&range(3, 4)));
    }

    #[test]
    fn contains_is_inclusive_start_exclusive_end() {
        let r = range(0, 2);
        assert!(r.contains(&r.start()));
        assert!(!r.contains(&r.end()));
    }

    proptest! {
        // overlaps() must agree with the arithmetic characterization
        // a1 < b2 && b1 < a2, for arbitrary hour offsets.
        #[test]
        fn overlap_matches_characterization(
            a1 in 0i64..200, a_len in 1i64..48,
            b1 in 0i64..200, b_len in 1i64..48,
        ) {
            let a2 = a1 + a_len;
            let b2 = b1 + b_len;
            let a = range(a1, a2);
            let b = range(b1, b2);

            let expected = a1 < b2 && b1 < a2;
            prop_assert_eq!(a.overlaps(&b), expected);
            // Symmetry
            prop_assert_eq!(b.overlaps(&a), expected);
        }
    }
}
