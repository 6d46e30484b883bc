//! Unified error system for the Flow booking portal
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Schedule errors (opening hours, timezones, weekdays)
//! - 4xxx: Booking errors (zones, booking status snapshots)
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! // Create a simple error
//! let err = AppError::new(ErrorCode::ZoneNotFound);
//!
//! // Create an error with details
//! let err = AppError::invalid_opening_hours("Invalid time '25:00'")
//!     .with_detail("weekday", "friday");
//! assert_eq!(err.code, ErrorCode::InvalidOpeningHours);
//! ```

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
