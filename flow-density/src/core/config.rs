use chrono_tz::Tz;

use crate::utils::{AppError, AppResult, time};

/// Engine configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | FLOW_TIMEZONE | Europe/Paris | timezone of the local hour buckets |
/// | LOG_LEVEL | info | tracing max level |
/// | LOG_DIR | (unset) | directory for daily rolling log files |
/// | ENVIRONMENT | development | runtime environment |
///
/// # Example
///
/// ```ignore
/// FLOW_TIMEZONE=Europe/Madrid LOG_LEVEL=debug flow-density density --snapshot day.json
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// IANA name of the timezone used for local conversion
    pub timezone: String,
    /// tracing level: trace | debug | info | warn | error
    pub log_level: String,
    /// Optional log directory
    pub log_dir: Option<String>,
    /// development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Missing variables fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            timezone: lookup("FLOW_TIMEZONE").unwrap_or_else(|| "Europe/Paris".into()),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: lookup("LOG_DIR").filter(|dir| !dir.trim().is_empty()),
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".into()),
        }
    }

    /// Parsed timezone
    pub fn timezone(&self) -> AppResult<Tz> {
        time::parse_timezone(&self.timezone)
    }

    /// Check the log level
    ///
    /// The timezone is checked by [`Config::timezone`], since the CLI may
    /// override it.
    pub fn validate(&self) -> AppResult<()> {
        if self.log_level.parse::<tracing::Level>().is_err() {
            return Err(AppError::config(format!(
                "LOG_LEVEL must be one of trace, debug, info, warn, error (got '{}')",
                self.log_level
            ))
            .with_detail("LOG_LEVEL", self.log_level.clone()));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
