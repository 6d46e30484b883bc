//! Density board: aligned sample rows for zones rendered side by side

use chrono_tz::Tz;
use serde::Serialize;
use shared::{BookingStatus, Zone};

use super::density::{DensityPoint, get_day_density_samples};
use super::range::{DensityTimeRange, get_day_density_time_range};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DensityRow {
    pub zone_id: String,
    pub zone_name: String,
    pub samples: Vec<DensityPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DensityBoard {
    pub range: DensityTimeRange,
    pub rows: Vec<DensityRow>,
}

impl DensityBoard {
    pub fn row(&self, zone_id: &str) -> Option<&DensityRow> {
        self.rows.iter().find(|row| row.zone_id == zone_id)
    }
}

/// Sample every zone over the range shared by all of them
pub fn build_density_board(entries: &[(&Zone, &BookingStatus)], tz: Tz) -> DensityBoard {
    let range = get_day_density_time_range(entries.iter().map(|(_, status)| *status), tz);

    let rows = entries
        .iter()
        .map(|(zone, status)| DensityRow {
            zone_id: zone.id.clone(),
            zone_name: zone.name.clone(),
            samples: range
                .bounds()
                .map(|(start, end)| get_day_density_samples(start, end, status, zone))
                .unwrap_or_default(),
        })
        .collect();

    DensityBoard { range, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use chrono_tz::Europe::Paris;
    use shared::{AvailabilityInterval, OpeningHours};

    fn zone(id: &str) -> Zone {
        Zone {
            id: id.to_string(),
            name: id.to_uppercase(),
            opening_hours: OpeningHours::new(),
            slot_duration: 60,
            concurrent_slots: 1,
        }
    }

    fn hourly(zone_id: &str, hours: &[u32]) -> BookingStatus {
        BookingStatus {
            zone_id: zone_id.to_string(),
            availability_status: hours
                .iter()
                .map(|h| {
                    let start: DateTime<Utc> =
                        format!("2023-09-22T{:02}:00:00Z", h).parse().unwrap();
                    AvailabilityInterval {
                        start_time: start,
                        end_time: start + chrono::Duration::hours(1),
                        booked: 0,
                        remaining: 1,
                        max: 1,
                    }
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_rows_are_aligned_on_shared_range() {
        let (a, b) = (zone("a"), zone("b"));
        let (status_a, status_b) = (hourly("a", &[6, 7, 8]), hourly("b", &[8, 9, 10]));
        let board = build_density_board(&[(&a, &status_a), (&b, &status_b)], Paris);

        let row_a = board.row("a").unwrap();
        let row_b = board.row("b").unwrap();
        assert_eq!(row_a.samples.len(), 5);
        assert_eq!(row_b.samples.len(), 5);
        assert!(
            row_a
                .samples
                .iter()
                .zip(&row_b.samples)
                .all(|(x, y)| x.at == y.at)
        );

        // a is open 06-09 UTC, b is open 08-11 UTC
        assert!(row_a.samples[4].sample.is_unavailable());
        assert!(row_b.samples[0].sample.is_unavailable());
        assert_eq!(row_a.zone_name, "A");
    }

    #[test]
    fn test_board_without_availability_has_empty_rows() {
        let a = zone("a");
        let status_a = hourly("a", &[]);
        let board = build_density_board(&[(&a, &status_a)], Paris);
        assert!(board.range.bounds().is_none());
        assert!(board.rows[0].samples.is_empty());
    }
}
