//! Common time range for aligning density rows of several zones

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use shared::BookingStatus;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DensityTimeRange {
    pub start_date: Option<DateTime<Tz>>,
    pub end_date: Option<DateTime<Tz>>,
}

impl DensityTimeRange {
    pub fn bounds(&self) -> Option<(DateTime<Tz>, DateTime<Tz>)> {
        self.start_date.zip(self.end_date)
    }
}

/// Earliest first and latest last availability start across `statuses`
pub fn get_day_density_time_range<'a, I>(statuses: I, tz: Tz) -> DensityTimeRange
where
    I: IntoIterator<Item = &'a BookingStatus>,
{
    let bounds = statuses
        .into_iter()
        .filter_map(BookingStatus::availability_bounds)
        .fold(
            None::<(DateTime<Utc>, DateTime<Utc>)>,
            |acc, (first, last)| match acc {
                Some((start, end)) => Some((start.min(first), end.max(last))),
                None => Some((first, last)),
            },
        );

    DensityTimeRange {
        start_date: bounds.map(|(start, _)| start.with_timezone(&tz)),
        end_date: bounds.map(|(_, end)| end.with_timezone(&tz)),
    }
}
