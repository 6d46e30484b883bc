//! Data models
//!
//! Shared between the density engine and the portal front-end (via API).
//! Timestamps are UTC ISO8601 on the wire; local conversion happens in the
//! engine with the caller's timezone.

pub mod booking;
pub mod slot;
pub mod weekday;
pub mod zone;

// Re-exports
pub use booking::*;
pub use slot::*;
pub use weekday::*;
pub use zone::*;
