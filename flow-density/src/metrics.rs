//! Capacity resolution
//!
//! Effective concurrent capacity of a time slice, given the availability
//! intervals that cover it and the zone's blackouts.

use chrono::{DateTime, Utc};
use shared::{PartialBookingStatus, Zone};

/// Effective capacity of the slice `[from, to)`
///
/// - no availability interval: 0
/// - the slice lies inside an unavailability: 0
/// - an interval whose part inside the slice is blacked out contributes 0
/// - otherwise an interval contributes its `max`, capped by the zone's
///   `concurrent_slots` when that is set
///
/// The slice capacity is the largest contribution.
pub fn real_max(
    slice: &PartialBookingStatus<'_>,
    zone: &Zone,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> u32 {
    if slice.unavailabilities.iter().any(|u| u.covers(from, to)) {
        return 0;
    }

    slice
        .availability_status
        .iter()
        .map(|interval| {
            let start = interval.start_time.max(from);
            let end = interval.end_time.min(to);
            // Interval outside the bounds: judge it as a whole
            let (start, end) = if start < end {
                (start, end)
            } else {
                (interval.start_time, interval.end_time)
            };
            let blacked_out = slice.unavailabilities.iter().any(|u| u.covers(start, end));
            if blacked_out {
                0
            } else if zone.concurrent_slots > 0 {
                interval.max.min(zone.concurrent_slots)
            } else {
                interval.max
            }
        })
        .max()
        .unwrap_or(0)
}
