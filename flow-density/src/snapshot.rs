//! Booking snapshot files
//!
//! A snapshot is the JSON the portal fetched for a day:
//!
//! ```json
//! { "zones": [...], "booking_statuses": [...] }
//! ```

use std::fs;
use std::path::Path;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use shared::{BookingStatus, Weekday, Zone};

use crate::utils::{AppError, AppResult, ErrorCode};
use crate::zone::{DayGrid, DensityBoard, build_density_board, get_grid_slots};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub zones: Vec<Zone>,
    #[serde(default)]
    pub booking_statuses: Vec<BookingStatus>,
}

impl Snapshot {
    /// Read, decode and validate a snapshot file
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| AppError::from(e).with_detail("path", path.display().to_string()))?;
        let snapshot = Self::from_json(&raw)
            .map_err(|e| e.with_detail("path", path.display().to_string()))?;

        tracing::info!(
            path = %path.display(),
            zones = snapshot.zones.len(),
            statuses = snapshot.booking_statuses.len(),
            "Loaded booking snapshot"
        );
        Ok(snapshot)
    }

    pub fn from_json(raw: &str) -> AppResult<Self> {
        let snapshot: Snapshot = serde_json::from_str(raw)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn validate(&self) -> AppResult<()> {
        for zone in &self.zones {
            zone.validate()?;
        }
        for status in &self.booking_statuses {
            if !self.zones.iter().any(|z| z.id == status.zone_id) {
                return Err(AppError::zone_not_found(status.zone_id.clone())
                    .with_detail("source", "booking_statuses"));
            }
        }
        Ok(())
    }

    pub fn zone(&self, zone_id: &str) -> AppResult<&Zone> {
        self.zones
            .iter()
            .find(|z| z.id == zone_id)
            .ok_or_else(|| AppError::zone_not_found(zone_id))
    }

    pub fn booking_status(&self, zone_id: &str) -> AppResult<&BookingStatus> {
        self.booking_statuses
            .iter()
            .find(|s| s.zone_id == zone_id)
            .ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::BookingStatusNotFound,
                    format!("No booking status for zone {}", zone_id),
                )
                .with_detail("zone_id", zone_id)
            })
    }

    /// Day grid of one zone
    pub fn day_grid(&self, zone_id: &str, weekday: Weekday, tz: Tz) -> AppResult<DayGrid> {
        let zone = self.zone(zone_id)?;
        let status = self.booking_status(zone_id)?;
        Ok(get_grid_slots(zone, status, weekday, tz))
    }

    /// Density board of the given zones, or of every zone with a status
    pub fn density_board(&self, zone_ids: &[String], tz: Tz) -> AppResult<DensityBoard> {
        let entries: Vec<(&Zone, &BookingStatus)> = if zone_ids.is_empty() {
            self.booking_statuses
                .iter()
                .filter_map(|status| self.zone(&status.zone_id).ok().map(|zone| (zone, status)))
                .collect()
        } else {
            zone_ids
                .iter()
                .map(|id| Ok((self.zone(id)?, self.booking_status(id)?)))
                .collect::<AppResult<_>>()?
        };
        Ok(build_density_board(&entries, tz))
    }
}
