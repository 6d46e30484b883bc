//! Time helpers: timezone parsing and local wall-clock arithmetic
//!
//! Snapshots carry UTC instants; every hour bucket of the portal is a
//! local hour of the zone's timezone.

use chrono::{DateTime, NaiveDate, Timelike};
use chrono_tz::Tz;

use super::{AppError, AppResult};

/// Parse an IANA timezone name (e.g. `Europe/Paris`)
pub fn parse_timezone(name: &str) -> AppResult<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| AppError::invalid_timezone(name))
}

/// Local `date hour:00` as an instant of `tz`
///
/// A repeated wall-clock hour resolves to its later occurrence. When the
/// hour does not exist (DST gap), the same wall-clock reading is taken as UTC.
pub fn hour_start_on(date: NaiveDate, hour: u32, tz: Tz) -> Option<DateTime<Tz>> {
    let naive = date.and_hms_opt(hour, 0, 0)?;
    Some(
        naive
            .and_local_timezone(tz)
            .latest()
            .unwrap_or_else(|| naive.and_utc().with_timezone(&tz)),
    )
}

/// Whether both instants fall in the same local hour of `a`'s timezone
pub fn same_local_hour(a: DateTime<Tz>, b: DateTime<Tz>) -> bool {
    let b = b.with_timezone(&a.timezone());
    a.date_naive() == b.date_naive() && a.hour() == b.hour()
}
