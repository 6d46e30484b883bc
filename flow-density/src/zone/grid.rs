//! Day grid: per local hour, the slots booked in a zone and whether the
//! hour opens or closes a stretch of opening hours.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Datelike, Duration, NaiveDate, Timelike, Utc};
use chrono_tz::Tz;
use serde::{Serialize, Serializer};
use shared::{AvailabilityInterval, BookingStatus, OpeningInterval, Slot, Weekday, Zone};

use crate::metrics::real_max;
use crate::slots;
use crate::utils::time;

pub const HOURS_PER_DAY: usize = 24;

/// Grid cell of one hour
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSlotValue {
    pub slots: Vec<Slot>,
    /// First open hour after a closed stretch
    pub opening: bool,
    /// First closed hour after an open stretch
    pub closing: bool,
    pub in_opening_hours: bool,
}

/// Hour-indexed grid of a day
///
/// `None` marks an omitted hour, which differs from an hour present with
/// no slots.
#[derive(Debug, Clone, PartialEq)]
pub struct DayGrid {
    hours: [Option<GridSlotValue>; HOURS_PER_DAY],
}

impl DayGrid {
    pub fn empty() -> Self {
        Self {
            hours: std::array::from_fn(|_| None),
        }
    }

    pub fn get(&self, hour: u32) -> Option<&GridSlotValue> {
        self.hours.get(hour as usize).and_then(Option::as_ref)
    }

    pub fn contains(&self, hour: u32) -> bool {
        self.get(hour).is_some()
    }

    /// Number of hours present
    pub fn len(&self) -> usize {
        self.hours.iter().filter(|h| h.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Present hours in ascending order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &GridSlotValue)> {
        self.hours
            .iter()
            .enumerate()
            .filter_map(|(hour, value)| value.as_ref().map(|v| (hour as u32, v)))
    }

    fn set(&mut self, hour: u32, value: GridSlotValue) {
        self.hours[hour as usize] = Some(value);
    }
}

impl Default for DayGrid {
    fn default() -> Self {
        Self::empty()
    }
}

/// Serialized as the sparse `{hour: cell}` map the portal renders
impl Serialize for DayGrid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Build the day grid of `zone` for `weekday` in `tz`
///
/// A slot is placed at its local start hour even when the opening interval
/// ends mid-hour (a slot at 11:10 shows at 11 for a zone closing at 11:25).
pub fn get_grid_slots(zone: &Zone, status: &BookingStatus, weekday: Weekday, tz: Tz) -> DayGrid {
    let Some(pairs) = zone.opening_hours.raw(weekday) else {
        tracing::debug!(zone_id = %zone.id, %weekday, "No opening hours for weekday");
        return DayGrid::empty();
    };

    let intervals: Vec<OpeningInterval> = pairs
        .iter()
        .filter_map(|pair| match OpeningInterval::parse(pair) {
            Ok(interval) => Some(interval),
            Err(e) => {
                tracing::warn!(
                    zone_id = %zone.id,
                    %weekday,
                    "Skipping malformed opening interval: {}",
                    e
                );
                None
            }
        })
        .collect();
    let always_open = zone.opening_hours.is_always_open(weekday);
    let target: chrono::Weekday = weekday.into();

    // Local dates on the target weekday touched by availability data
    let dates: BTreeSet<NaiveDate> = status
        .availability_status
        .iter()
        .flat_map(|interval| {
            [
                interval.start_time.with_timezone(&tz).date_naive(),
                interval.end_time.with_timezone(&tz).date_naive(),
            ]
        })
        .filter(|date| date.weekday() == target)
        .collect();

    let mut grid = DayGrid::empty();
    let mut closed = true;
    let mut at_least_one_opened_visited = false;

    for hour in 0..HOURS_PER_DAY as u32 {
        let mut hour_slots: Vec<Slot> = status
            .scheduled_slots
            .iter()
            .filter(|slot| {
                let local = slot.local_start(tz);
                local.hour() == hour && local.weekday() == target
            })
            .cloned()
            .collect();
        slots::sort(&mut hour_slots, tz);

        let capacity = dates
            .iter()
            .filter_map(|&date| {
                let from = time::hour_start_on(date, hour, tz)?.with_timezone(&Utc);
                let slice = status.slice(|interval| covers_hour(interval, date, hour, from, tz));
                Some(real_max(&slice, zone, from, from + Duration::hours(1)))
            })
            .max()
            .unwrap_or(0);
        let in_opening_hours = always_open || intervals.iter().any(|i| i.overlaps_hour(hour));

        if capacity > 0 && in_opening_hours {
            grid.set(
                hour,
                GridSlotValue {
                    slots: hour_slots,
                    opening: closed,
                    closing: false,
                    in_opening_hours: true,
                },
            );
            closed = false;
            at_least_one_opened_visited = true;
        } else {
            let closing = !closed && at_least_one_opened_visited;
            closed = true;
            // Stray bookings outside opening hours stay visible
            if closing || !hour_slots.is_empty() {
                grid.set(
                    hour,
                    GridSlotValue {
                        slots: hour_slots,
                        opening: false,
                        closing,
                        in_opening_hours: false,
                    },
                );
            }
        }
    }

    tracing::debug!(
        zone_id = %zone.id,
        %weekday,
        hours = grid.len(),
        active_slots = grid
            .iter()
            .map(|(_, cell)| slots::count_active(&cell.slots))
            .sum::<usize>(),
        "Built day grid"
    );
    grid
}

/// Day grids of the whole week, Monday first
pub fn get_week_grid(zone: &Zone, status: &BookingStatus, tz: Tz) -> BTreeMap<Weekday, DayGrid> {
    Weekday::ALL
        .into_iter()
        .map(|weekday| (weekday, get_grid_slots(zone, status, weekday, tz)))
        .collect()
}

/// Interval starts at `hour` of the local `date`, or spans that hour's start
fn covers_hour(
    interval: &AvailabilityInterval,
    date: NaiveDate,
    hour: u32,
    hour_start: DateTime<Utc>,
    tz: Tz,
) -> bool {
    let start: DateTime<Tz> = interval.start_time.with_timezone(&tz);
    (start.date_naive() == date && start.hour() == hour)
        || (interval.start_time < hour_start && interval.end_time > hour_start)
}
