//! Zone computations of the booking portal
//!
//! - [`grid`]: hour-indexed day grid of booked slots
//! - [`density`]: per-hour density samples for the heat-bar
//! - [`range`]: shared time range across zones
//! - [`board`]: aligned density rows for several zones

pub mod board;
pub mod density;
pub mod grid;
pub mod range;

pub use board::{DensityBoard, DensityRow, build_density_board};
pub use density::{DensityPoint, DensitySample, get_day_density_sample, get_day_density_samples};
pub use grid::{DayGrid, GridSlotValue, get_grid_slots, get_week_grid};
pub use range::{DensityTimeRange, get_day_density_time_range};
