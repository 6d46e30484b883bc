//! Flow Density - booking density of loading zones
//!
//! # Overview
//!
//! From a zone's opening hours and a booking snapshot, two views are built:
//!
//! - **Day grid** (`zone::grid`): bookings bucketed by local hour, with opening/closing markers
//! - **Density bar** (`zone::density`): booked count per hour, or `unavailable`
//!
//! # Layout
//!
//! ```text
//! flow-density/src/
//! ├── core/          # configuration
//! ├── utils/         # logging, timezone helpers, error re-exports
//! ├── metrics.rs     # effective capacity
//! ├── slots.rs       # slot ordering and status
//! ├── snapshot.rs    # snapshot files
//! └── zone/          # grid, density, time range, board
//! ```

pub mod core;
pub mod metrics;
pub mod slots;
pub mod snapshot;
pub mod utils;
pub mod zone;

pub use core::Config;
pub use snapshot::Snapshot;
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use zone::{
    DayGrid, DensityBoard, DensityPoint, DensitySample, DensityTimeRange, GridSlotValue,
    build_density_board, get_day_density_sample, get_day_density_samples,
    get_day_density_time_range, get_grid_slots, get_week_grid,
};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// Load `.env` and initialize logging from the resulting config
pub fn setup_environment() -> Config {
    dotenvy::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config
}
