//! Density samples behind the zone heat-bar

use std::fmt;

use chrono::{DateTime, Duration, Timelike, Utc};
use chrono_tz::Tz;
use serde::{Serialize, Serializer};
use shared::{BookingStatus, Zone};

use crate::metrics::real_max;
use crate::utils::time;

/// Load of a zone at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DensitySample {
    /// Sum of booked counts (capacity is positive)
    Booked(u32),
    /// No capacity at that instant
    Unavailable,
}

impl DensitySample {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, DensitySample::Unavailable)
    }

    pub fn booked(&self) -> Option<u32> {
        match self {
            DensitySample::Booked(n) => Some(*n),
            DensitySample::Unavailable => None,
        }
    }
}

/// Wire form: a bare integer or the string `"unavailable"`
impl Serialize for DensitySample {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DensitySample::Booked(n) => serializer.serialize_u32(*n),
            DensitySample::Unavailable => serializer.serialize_str("unavailable"),
        }
    }
}

impl fmt::Display for DensitySample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DensitySample::Booked(n) => write!(f, "{}", n),
            DensitySample::Unavailable => f.write_str("unavailable"),
        }
    }
}

/// A sample with the local instant it was taken at
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DensityPoint {
    pub at: DateTime<Tz>,
    pub sample: DensitySample,
}

/// Density of `zone` at `time`
///
/// Matching intervals start in the same local hour as `time` or strictly
/// contain it. Capacity is resolved over the local hour holding `time`.
pub fn get_day_density_sample(
    time: DateTime<Tz>,
    status: &BookingStatus,
    zone: &Zone,
) -> DensitySample {
    let tz = time.timezone();
    let instant = time.with_timezone(&Utc);
    let slice = status.slice(|interval| {
        time::same_local_hour(time, interval.start_time.with_timezone(&tz))
            || interval.strictly_contains(instant)
    });

    let from = time::hour_start_on(time.date_naive(), time.hour(), tz)
        .map_or(instant, |start| start.with_timezone(&Utc));
    let to = from + Duration::hours(1);

    if real_max(&slice, zone, from, to) > 0 {
        DensitySample::Booked(slice.booked())
    } else {
        DensitySample::Unavailable
    }
}

/// One sample per whole hour from `start` to `end` inclusive
pub fn get_day_density_samples(
    start: DateTime<Tz>,
    end: DateTime<Tz>,
    status: &BookingStatus,
    zone: &Zone,
) -> Vec<DensityPoint> {
    if end < start {
        return Vec::new();
    }

    let steps = (end - start).num_hours();
    let points: Vec<DensityPoint> = (0..=steps)
        .map(|step| {
            let at = start + Duration::hours(step);
            DensityPoint {
                at,
                sample: get_day_density_sample(at, status, zone),
            }
        })
        .collect();

    tracing::debug!(
        zone_id = %zone.id,
        samples = points.len(),
        unavailable = points.iter().filter(|p| p.sample.is_unavailable()).count(),
        "Computed density samples"
    );
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Europe::Paris;
    use shared::{AvailabilityInterval, OpeningHours, Unavailability, Weekday};

    fn at(s: &str) -> DateTime<Tz> {
        s.parse::<DateTime<Utc>>().unwrap().with_timezone(&Paris)
    }

    fn zone() -> Zone {
        Zone {
            id: "dock-1".to_string(),
            name: "Dock 1".to_string(),
            opening_hours: OpeningHours::new().with_day(Weekday::Friday, &[("08:00", "12:00")]),
            slot_duration: 30,
            concurrent_slots: 2,
        }
    }

    fn interval(start: &str, end: &str, booked: u32, max: u32) -> AvailabilityInterval {
        AvailabilityInterval {
            start_time: start.parse().unwrap(),
            end_time: end.parse().unwrap(),
            booked,
            remaining: max.saturating_sub(booked),
            max,
        }
    }

    fn status(intervals: Vec<AvailabilityInterval>) -> BookingStatus {
        BookingStatus {
            zone_id: "dock-1".to_string(),
            availability_status: intervals,
            ..Default::default()
        }
    }

    #[test]
    fn test_sample_sums_same_hour_intervals() {
        let status = status(vec![
            interval("2023-09-22T06:00:00Z", "2023-09-22T06:30:00Z", 1, 2),
            interval("2023-09-22T06:30:00Z", "2023-09-22T07:00:00Z", 2, 2),
            interval("2023-09-22T07:00:00Z", "2023-09-22T07:30:00Z", 2, 2),
        ]);
        let sample = get_day_density_sample(at("2023-09-22T06:00:00Z"), &status, &zone());
        assert_eq!(sample, DensitySample::Booked(3));
    }

    #[test]
    fn test_sample_uses_strictly_containing_interval() {
        let status = status(vec![interval(
            "2023-09-22T05:30:00Z",
            "2023-09-22T07:30:00Z",
            1,
            2,
        )]);
        let sample = get_day_density_sample(at("2023-09-22T07:00:00Z"), &status, &zone());
        assert_eq!(sample, DensitySample::Booked(1));

        // Interval ending exactly at the sample instant does not match
        let sample = get_day_density_sample(at("2023-09-22T07:30:00Z"), &status, &zone());
        assert_eq!(sample, DensitySample::Unavailable);
    }

    #[test]
    fn test_zero_capacity_is_unavailable_regardless_of_bookings() {
        let full = status(vec![interval(
            "2023-09-22T06:00:00Z",
            "2023-09-22T07:00:00Z",
            3,
            0,
        )]);
        let sample = get_day_density_sample(at("2023-09-22T06:00:00Z"), &full, &zone());
        assert!(sample.is_unavailable());
        assert_eq!(sample.booked(), None);

        let mut blacked_out = status(vec![interval(
            "2023-09-22T06:00:00Z",
            "2023-09-22T07:00:00Z",
            1,
            2,
        )]);
        blacked_out.unavailabilities.push(Unavailability {
            start_time: "2023-09-22T05:00:00Z".parse().unwrap(),
            end_time: "2023-09-22T08:00:00Z".parse().unwrap(),
            reason: Some("strike".to_string()),
        });
        let sample = get_day_density_sample(at("2023-09-22T06:00:00Z"), &blacked_out, &zone());
        assert_eq!(sample, DensitySample::Unavailable);
    }

    #[test]
    fn test_blackout_inside_long_interval_is_unavailable() {
        let mut status = status(vec![interval(
            "2023-09-22T06:00:00Z",
            "2023-09-22T15:00:00Z",
            0,
            2,
        )]);
        status.unavailabilities.push(Unavailability {
            start_time: "2023-09-22T10:00:00Z".parse().unwrap(),
            end_time: "2023-09-22T11:00:00Z".parse().unwrap(),
            reason: None,
        });

        // 12:15 local sits inside the 12:00-13:00 blackout
        let sample = get_day_density_sample(at("2023-09-22T10:15:00Z"), &status, &zone());
        assert_eq!(sample, DensitySample::Unavailable);
        let sample = get_day_density_sample(at("2023-09-22T09:15:00Z"), &status, &zone());
        assert_eq!(sample, DensitySample::Booked(0));
    }

    #[test]
    fn test_samples_count_and_order() {
        let status = status(vec![interval(
            "2023-09-22T00:00:00Z",
            "2023-09-23T00:00:00Z",
            0,
            1,
        )]);
        let points = get_day_density_samples(
            at("2023-09-22T06:00:00Z"),
            at("2023-09-22T14:30:00Z"),
            &status,
            &zone(),
        );
        assert_eq!(points.len(), 9);
        assert!(points.windows(2).all(|w| w[0].at < w[1].at));
        assert_eq!(points[0].at, at("2023-09-22T06:00:00Z"));
        assert_eq!(points[8].at, at("2023-09-22T14:00:00Z"));
    }

    #[test]
    fn test_samples_single_and_reversed_range() {
        let status = status(vec![]);
        let instant = at("2023-09-22T06:00:00Z");
        let single = get_day_density_samples(instant, instant, &status, &zone());
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].sample, DensitySample::Unavailable);

        let reversed = get_day_density_samples(
            instant,
            at("2023-09-22T05:00:00Z"),
            &status,
            &zone(),
        );
        assert!(reversed.is_empty());
    }

    #[test]
    fn test_sample_serialization() {
        let samples = vec![DensitySample::Booked(2), DensitySample::Unavailable];
        assert_eq!(
            serde_json::to_string(&samples).unwrap(),
            r#"[2,"unavailable"]"#
        );
        assert_eq!(DensitySample::Unavailable.to_string(), "unavailable");
    }
}
