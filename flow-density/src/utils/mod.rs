//! Utility module
//!
//! - [`AppError`] / [`AppResult`] (from `shared::error`)
//! - logger setup
//! - timezone helpers

pub mod logger;
pub mod time;

pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode};
