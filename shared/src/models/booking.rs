//! Booking Status Model
//!
//! Snapshot of a zone's bookings and capacity, refreshed by the portal's
//! polling layer and read-only here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Slot;

/// Capacity counters of a time range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityInterval {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub booked: u32,
    #[serde(default)]
    pub remaining: u32,
    #[serde(default)]
    pub max: u32,
}

impl AvailabilityInterval {
    /// `start < time < end`
    pub fn strictly_contains(&self, time: DateTime<Utc>) -> bool {
        self.start_time < time && self.end_time > time
    }
}

/// Blackout interval during which the zone has no usable capacity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unavailability {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Unavailability {
    /// Whether `[start, end)` lies entirely inside this blackout
    pub fn covers(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.start_time <= start && self.end_time >= end
    }
}

/// Booking status of one zone
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingStatus {
    pub zone_id: String,
    #[serde(default)]
    pub scheduled_slots: Vec<Slot>,
    #[serde(default)]
    pub availability_status: Vec<AvailabilityInterval>,
    #[serde(default)]
    pub unavailabilities: Vec<Unavailability>,
}

impl BookingStatus {
    /// Reduced view keeping the availability intervals accepted by `keep`
    pub fn slice<F>(&self, mut keep: F) -> PartialBookingStatus<'_>
    where
        F: FnMut(&AvailabilityInterval) -> bool,
    {
        PartialBookingStatus {
            availability_status: self
                .availability_status
                .iter()
                .filter(|interval| keep(interval))
                .collect(),
            unavailabilities: &self.unavailabilities,
        }
    }

    /// Earliest and latest availability start
    pub fn availability_bounds(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let mut starts = self.availability_status.iter().map(|i| i.start_time);
        let first = starts.next()?;
        Some(starts.fold((first, first), |(min, max), start| {
            (min.min(start), max.max(start))
        }))
    }
}

/// Availability intervals of a time slice plus the zone's blackouts
#[derive(Debug, Clone, Default)]
pub struct PartialBookingStatus<'a> {
    pub availability_status: Vec<&'a AvailabilityInterval>,
    pub unavailabilities: &'a [Unavailability],
}

impl PartialBookingStatus<'_> {
    pub fn is_empty(&self) -> bool {
        self.availability_status.is_empty()
    }

    /// Sum of `booked` across the slice, saturating at `u32::MAX`
    pub fn booked(&self) -> u32 {
        self.availability_status
            .iter()
            .fold(0u32, |acc, i| acc.saturating_add(i.booked))
    }
}
