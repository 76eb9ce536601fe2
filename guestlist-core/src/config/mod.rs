//! Configuration for guestlist
//!
//! Typed configuration with defaults and environment-variable loading.
//! Every variable is optional; absent ones fall back to the default.
//!
//! | Variable                     | Meaning                                |
//! |------------------------------|----------------------------------------|
//! | `GUESTLIST_LOG_LEVEL`        | minimum log level (trace..error)       |
//! | `GUESTLIST_LOG_JSON`         | `true`/`false`, JSON log output        |
//! | `GUESTLIST_INVITE_TTL_HOURS` | default invitation lifetime in hours   |

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Invitation issuance configuration
    pub invites: InviteConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON formatting
    pub json_format: bool,
}

/// Invitation issuance configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InviteConfig {
    /// How long a freshly issued invitation stays valid
    #[serde(with = "humantime_serde")]
    pub default_ttl: Duration,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}

impl Default for InviteConfig {
    fn default() -> Self {
        Self {
            // Three days to answer an invitation.
            default_ttl: Duration::from_secs(72 * 3600),
        }
    }
}

impl Config {
    /// Load configuration from `GUESTLIST_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Ok(level) = env::var("GUESTLIST_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(json) = env::var("GUESTLIST_LOG_JSON") {
            config.logging.json_format = json.parse().map_err(|_| ConfigError::InvalidValue {
                var: "GUESTLIST_LOG_JSON",
                value: json,
            })?;
        }

        if let Ok(hours) = env::var("GUESTLIST_INVITE_TTL_HOURS") {
            let hours: u64 = hours.parse().map_err(|_| ConfigError::InvalidValue {
                var: "GUESTLIST_INVITE_TTL_HOURS",
                value: hours,
            })?;
            config.invites.default_ttl = Duration::from_secs(hours * 3600);
        }

        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value}")]
    InvalidValue { var: &'static str, value: String },
}
