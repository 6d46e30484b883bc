//! Slot Model

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Lifecycle of a slot booking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotStatus {
    #[default]
    Booked,
    Arrived,
    InProgress,
    Completed,
    Cancelled,
    NoShow,
}

/// A booking occupying a time interval of a zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub id: String,
    /// Slot start (UTC)
    pub start_time: DateTime<Utc>,
    /// Slot end (UTC)
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub status: SlotStatus,
    /// Carrier display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,
    /// Booking reference shown on the slot cell
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl Slot {
    /// Slot start converted to the given timezone
    pub fn local_start(&self, tz: Tz) -> DateTime<Tz> {
        self.start_time.with_timezone(&tz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_slot_deserialize_defaults() {
        let json = r#"{
            "id": "slot-1",
            "start_time": "2023-09-22T13:10:00Z",
            "end_time": "2023-09-22T13:40:00Z"
        }"#;
        let slot: Slot = serde_json::from_str(json).unwrap();
        assert_eq!(slot.status, SlotStatus::Booked);
        assert!(slot.carrier.is_none());
        assert_eq!(slot.local_start(chrono_tz::Europe::Paris).hour(), 15);
    }

    #[test]
    fn test_slot_status_snake_case() {
        let status: SlotStatus = serde_json::from_str("\"in_progress\"").unwrap();
        assert_eq!(status, SlotStatus::InProgress);
        assert_eq!(
            serde_json::to_string(&SlotStatus::NoShow).unwrap(),
            "\"no_show\""
        );
    }
}
