//! Shared types for the Flow booking portal
//!
//! Domain models exchanged with the booking API (zones, booking status
//! snapshots, slots) and the unified error system used by every crate.

pub mod error;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{
    AvailabilityInterval, BookingStatus, OpeningHours, OpeningInterval, PartialBookingStatus,
    Slot, SlotStatus, Unavailability, Weekday, Zone,
};
