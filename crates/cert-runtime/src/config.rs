//! # Runtime Configuration
//!
//! Defaults suitable for development, each overridable from the
//! environment:
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `CERT_CONFIRMATION_DEADLINE_MS` | Deadline on confirmation waits |
//! | `CERT_SYNC_INTERVAL_MS` | Background projection sync period |
//! | `CERT_DATA_DIR` | Durable projection snapshot directory |

use std::path::PathBuf;
use std::time::Duration;

/// Complete runtime configuration.
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// External deadline imposed on every confirmation wait; overruns
    /// yield an indeterminate registration outcome.
    pub confirmation_deadline: Duration,
    /// Period of the background projection-sync/reconciliation loop.
    pub sync_interval: Duration,
    /// Directory for the durable projection snapshot; in-memory
    /// projection when unset.
    pub data_dir: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            confirmation_deadline: Duration::from_secs(30),
            sync_interval: Duration::from_secs(10),
            data_dir: None,
        }
    }
}

impl CoreConfig {
    /// Load defaults with environment overrides.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(deadline) = read_millis("CERT_CONFIRMATION_DEADLINE_MS")? {
            config.confirmation_deadline = deadline;
        }
        if let Some(interval) = read_millis("CERT_SYNC_INTERVAL_MS")? {
            config.sync_interval = interval;
        }
        if let Ok(dir) = std::env::var("CERT_DATA_DIR") {
            if !dir.is_empty() {
                config.data_dir = Some(PathBuf::from(dir));
            }
        }
        Ok(config)
    }
}

fn read_millis(var: &'static str) -> Result<Option<Duration>, ConfigError> {
    match std::env::var(var) {
        Err(_) => Ok(None),
        Ok(raw) => raw
            .parse::<u64>()
            .map(|ms| Some(Duration::from_millis(ms)))
            .map_err(|_| ConfigError::InvalidDuration { var, value: raw }),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be an integer millisecond count, got {value:?}")]
    InvalidDuration { var: &'static str, value: String },
}
