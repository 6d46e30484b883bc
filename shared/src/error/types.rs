//! Application error type

use super::codes::ErrorCode;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// This is the primary error type of the portal crates, providing:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details for debugging
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (offending field, value, ...)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a zone not found error
    pub fn zone_not_found(zone_id: impl Into<String>) -> Self {
        let id = zone_id.into();
        Self::with_message(ErrorCode::ZoneNotFound, format!("Zone {} not found", id))
            .with_detail("zone_id", id)
    }

    /// Create an invalid opening hours error
    pub fn invalid_opening_hours(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidOpeningHours, msg)
    }

    /// Create an invalid timezone error
    pub fn invalid_timezone(name: impl Into<String>) -> Self {
        let n = name.into();
        Self::with_message(ErrorCode::InvalidTimezone, format!("Unknown timezone: {}", n))
            .with_detail("timezone", n)
    }

    /// Create an invalid weekday error
    pub fn invalid_weekday(name: impl Into<String>) -> Self {
        let n = name.into();
        Self::with_message(ErrorCode::InvalidWeekday, format!("Unknown weekday: {}", n))
            .with_detail("weekday", n)
    }

    /// Create an invalid snapshot error
    pub fn snapshot_invalid(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::SnapshotInvalid, msg)
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ConfigError, msg)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::snapshot_invalid(err.to_string())
            .with_detail("line", err.line())
            .with_detail("column", err.column())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_message(ErrorCode::FileReadFailed, err.to_string())
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
