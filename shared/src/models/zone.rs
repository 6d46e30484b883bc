//! Zone Model
//!
//! A zone is a bookable loading/unloading location (dock, warehouse bay)
//! with its own weekly opening hours and slot capacity.

use std::collections::BTreeMap;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use super::Weekday;
use crate::error::{AppError, AppResult};

const TIME_FORMAT: &str = "%H:%M";
const MINUTES_PER_DAY: u32 = 24 * 60;

/// Zone entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub opening_hours: OpeningHours,
    /// Slot length in minutes
    #[serde(default = "default_slot_duration")]
    pub slot_duration: u32,
    /// Nominal number of slots that can run at the same time
    #[serde(default = "default_concurrent_slots")]
    pub concurrent_slots: u32,
}

fn default_slot_duration() -> u32 {
    30
}

fn default_concurrent_slots() -> u32 {
    1
}

impl Zone {
    /// Check the zone definition before it is handed to the engine
    pub fn validate(&self) -> AppResult<()> {
        if self.id.trim().is_empty() {
            return Err(AppError::validation("Zone id must not be empty"));
        }
        if self.slot_duration == 0 {
            return Err(AppError::validation("slot_duration must be positive")
                .with_detail("zone_id", self.id.clone()));
        }
        self.opening_hours
            .validate()
            .map_err(|e| e.with_detail("zone_id", self.id.clone()))
    }
}

/// Weekly opening hours: weekday -> list of `["HH:MM", "HH:MM"]` pairs
///
/// A weekday missing from the map is closed. A pair `["00:00", "00:00"]`
/// marks the whole day open; an end of `"00:00"` after a later start means
/// "until midnight".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpeningHours(BTreeMap<Weekday, Vec<[String; 2]>>);

impl OpeningHours {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style helper, mostly for fixtures
    pub fn with_day(mut self, weekday: Weekday, intervals: &[(&str, &str)]) -> Self {
        self.insert(
            weekday,
            intervals
                .iter()
                .map(|(start, end)| [start.to_string(), end.to_string()])
                .collect(),
        );
        self
    }

    pub fn insert(&mut self, weekday: Weekday, intervals: Vec<[String; 2]>) {
        self.0.insert(weekday, intervals);
    }

    /// Raw `"HH:MM"` pairs of a weekday
    pub fn raw(&self, weekday: Weekday) -> Option<&[[String; 2]]> {
        self.0.get(&weekday).map(Vec::as_slice)
    }

    /// Whether the weekday is declared as open `00:00`–`00:00`
    pub fn is_always_open(&self, weekday: Weekday) -> bool {
        self.raw(weekday).is_some_and(|pairs| {
            pairs
                .iter()
                .any(|pair| OpeningInterval::parse(pair).is_ok_and(|i| i.is_all_day()))
        })
    }

    /// Parsed intervals of a weekday, `None` when the weekday has no entry
    pub fn intervals(&self, weekday: Weekday) -> AppResult<Option<Vec<OpeningInterval>>> {
        let Some(pairs) = self.raw(weekday) else {
            return Ok(None);
        };
        pairs
            .iter()
            .enumerate()
            .map(|(index, pair)| {
                OpeningInterval::parse(pair).map_err(|e| {
                    e.with_detail("weekday", weekday.as_str())
                        .with_detail("index", index)
                })
            })
            .collect::<AppResult<Vec<_>>>()
            .map(Some)
    }

    /// Validate every weekday entry
    pub fn validate(&self) -> AppResult<()> {
        for weekday in self.0.keys() {
            self.intervals(*weekday)?;
        }
        Ok(())
    }
}

/// One parsed opening interval `[start, end)` of a day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningInterval {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl OpeningInterval {
    /// Parse a `["HH:MM", "HH:MM"]` pair
    pub fn parse(pair: &[String; 2]) -> AppResult<Self> {
        let start = parse_time(&pair[0])?;
        let end = parse_time(&pair[1])?;
        let interval = Self { start, end };

        if interval.end != NaiveTime::MIN && interval.end <= interval.start {
            return Err(AppError::invalid_opening_hours(format!(
                "Opening interval {}-{} ends before it starts",
                pair[0], pair[1]
            )));
        }
        Ok(interval)
    }

    /// `00:00`–`00:00`: the whole day
    pub fn is_all_day(&self) -> bool {
        self.start == NaiveTime::MIN && self.end == NaiveTime::MIN
    }

    fn start_minute(&self) -> u32 {
        self.start.hour() * 60 + self.start.minute()
    }

    fn end_minute(&self) -> u32 {
        if self.end == NaiveTime::MIN {
            MINUTES_PER_DAY
        } else {
            self.end.hour() * 60 + self.end.minute()
        }
    }

    /// Whether the hour bucket `[hour:00, hour+1:00)` overlaps this interval
    pub fn overlaps_hour(&self, hour: u32) -> bool {
        let bucket_start = hour * 60;
        let bucket_end = bucket_start + 60;
        self.start_minute() < bucket_end && self.end_minute() > bucket_start
    }
}

fn parse_time(value: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT).map_err(|_| {
        AppError::invalid_opening_hours(format!("Invalid opening time '{}'", value))
            .with_detail("value", value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn pair(start: &str, end: &str) -> [String; 2] {
        [start.to_string(), end.to_string()]
    }

    #[test]
    fn test_parse_interval() {
        let interval = OpeningInterval::parse(&pair("08:00", "11:25")).unwrap();
        assert_eq!(interval.start, NaiveTime::from_hms_opt(8, 0, 0).unwrap());
        assert_eq!(interval.end, NaiveTime::from_hms_opt(11, 25, 0).unwrap());
        assert!(!interval.is_all_day());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = OpeningInterval::parse(&pair("8h", "11:25")).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidOpeningHours);

        let err = OpeningInterval::parse(&pair("12:00", "09:00")).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidOpeningHours);
    }

    #[test]
    fn test_overlaps_hour_mid_hour_boundaries() {
        let morning = OpeningInterval::parse(&pair("08:00", "11:25")).unwrap();
        assert!(!morning.overlaps_hour(7));
        assert!(morning.overlaps_hour(8));
        assert!(morning.overlaps_hour(11));
        assert!(!morning.overlaps_hour(12));

        let afternoon = OpeningInterval::parse(&pair("13:30", "17:00")).unwrap();
        assert!(!afternoon.overlaps_hour(12));
        assert!(afternoon.overlaps_hour(13));
        assert!(afternoon.overlaps_hour(16));
        assert!(!afternoon.overlaps_hour(17));
    }

    #[test]
    fn test_midnight_end() {
        let evening = OpeningInterval::parse(&pair("22:00", "00:00")).unwrap();
        assert!(evening.overlaps_hour(23));
        assert!(!evening.overlaps_hour(21));

        let all_day = OpeningInterval::parse(&pair("00:00", "00:00")).unwrap();
        assert!(all_day.is_all_day());
        assert!((0..24).all(|h| all_day.overlaps_hour(h)));
    }

    #[test]
    fn test_opening_hours_lookup() {
        let hours = OpeningHours::new()
            .with_day(Weekday::Friday, &[("08:00", "11:25"), ("13:30", "17:00")])
            .with_day(Weekday::Sunday, &[("00:00", "00:00")]);

        assert_eq!(hours.intervals(Weekday::Friday).unwrap().unwrap().len(), 2);
        assert!(hours.intervals(Weekday::Monday).unwrap().is_none());
        assert!(hours.is_always_open(Weekday::Sunday));
        assert!(!hours.is_always_open(Weekday::Friday));
        assert!(hours.validate().is_ok());
    }

    #[test]
    fn test_opening_hours_json_shape() {
        let json = r#"{"friday": [["08:00", "11:25"], ["13:30", "17:00"]]}"#;
        let hours: OpeningHours = serde_json::from_str(json).unwrap();
        assert!(hours.raw(Weekday::Monday).is_none());
        assert_eq!(hours.raw(Weekday::Friday).unwrap()[1], pair("13:30", "17:00"));
    }

    #[test]
    fn test_zone_validate() {
        let mut zone = Zone {
            id: "dock-1".to_string(),
            name: "Dock 1".to_string(),
            opening_hours: OpeningHours::new().with_day(Weekday::Monday, &[("07:00", "25:00")]),
            slot_duration: 30,
            concurrent_slots: 2,
        };
        let err = zone.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidOpeningHours);
        assert!(err.details.unwrap().contains_key("zone_id"));

        zone.opening_hours = OpeningHours::new().with_day(Weekday::Monday, &[("07:00", "15:00")]);
        assert!(zone.validate().is_ok());

        zone.slot_duration = 0;
        assert_eq!(zone.validate().unwrap_err().code, ErrorCode::ValidationFailed);
    }
}
