//! Unified error codes for the Flow booking portal
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Schedule errors
//! - 4xxx: Booking errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so the portal front-end
/// can match on them without string parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,

    // ==================== 1xxx: Schedule ====================
    /// Opening hours entry is malformed
    InvalidOpeningHours = 1001,
    /// Timezone identifier is unknown
    InvalidTimezone = 1002,
    /// Weekday name is unknown
    InvalidWeekday = 1003,

    // ==================== 4xxx: Booking ====================
    /// Zone not found
    ZoneNotFound = 4001,
    /// No booking status for the zone
    BookingStatusNotFound = 4002,
    /// Booking snapshot could not be decoded
    SnapshotInvalid = 4003,

    // ==================== 9xxx: System ====================
    /// Configuration error
    ConfigError = 9005,
    /// File could not be read
    FileReadFailed = 9006,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",

            // Schedule
            ErrorCode::InvalidOpeningHours => "Opening hours are invalid",
            ErrorCode::InvalidTimezone => "Unknown timezone",
            ErrorCode::InvalidWeekday => "Unknown weekday",

            // Booking
            ErrorCode::ZoneNotFound => "Zone not found",
            ErrorCode::BookingStatusNotFound => "Booking status not found",
            ErrorCode::SnapshotInvalid => "Booking snapshot is invalid",

            // System
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::FileReadFailed => "Failed to read file",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),

            // Schedule
            1001 => Ok(ErrorCode::InvalidOpeningHours),
            1002 => Ok(ErrorCode::InvalidTimezone),
            1003 => Ok(ErrorCode::InvalidWeekday),

            // Booking
            4001 => Ok(ErrorCode::ZoneNotFound),
            4002 => Ok(ErrorCode::BookingStatusNotFound),
            4003 => Ok(ErrorCode::SnapshotInvalid),

            // System
            9005 => Ok(ErrorCode::ConfigError),
            9006 => Ok(ErrorCode::FileReadFailed),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
