//! Bot configuration
//!
//! Everything is fixed at startup and read from the environment; there are
//! no CLI flags, no config files, and no hot reload.

use std::time::Duration;
use thiserror::Error;
use worldstate_client::{Platform, DEFAULT_BASE_URL};

/// Default poll period when POLL_INTERVAL_SECS is unset
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Static bot configuration
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Discord bot token (secret)
    pub discord_token: String,
    /// Target channel for announcements
    pub channel_id: u64,
    /// Platform whose alerts are watched
    pub platform: Platform,
    /// Period of the poll timer
    pub poll_interval: Duration,
    /// Worldstate API root, overridable for staging
    pub base_url: String,
}

impl BotConfig {
    /// Load configuration from the process environment.
    ///
    /// `DISCORD_TOKEN` and `ALERT_CHANNEL_ID` are required; `WF_PLATFORM`
    /// (default `pc`), `POLL_INTERVAL_SECS` (default 60) and
    /// `WORLDSTATE_BASE_URL` are optional.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &'static str| {
            lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
        };

        let discord_token = get("DISCORD_TOKEN").ok_or(ConfigError::Missing("DISCORD_TOKEN"))?;

        let channel_id: u64 = get("ALERT_CHANNEL_ID")
            .ok_or(ConfigError::Missing("ALERT_CHANNEL_ID"))?
            .parse()
            .map_err(|e| ConfigError::Invalid {
                name: "ALERT_CHANNEL_ID",
                reason: format!("{}", e),
            })?;
        if channel_id == 0 {
            return Err(ConfigError::Invalid {
                name: "ALERT_CHANNEL_ID",
                reason: "must be nonzero".to_string(),
            });
        }

        let platform = match get("WF_PLATFORM") {
            Some(raw) => raw.parse().map_err(|reason| ConfigError::Invalid {
                name: "WF_PLATFORM",
                reason,
            })?,
            None => Platform::default(),
        };

        let poll_interval = match get("POLL_INTERVAL_SECS") {
            Some(raw) => {
                let secs: u64 = raw.parse().map_err(|e| ConfigError::Invalid {
                    name: "POLL_INTERVAL_SECS",
                    reason: format!("{}", e),
                })?;
                if secs == 0 {
                    return Err(ConfigError::Invalid {
                        name: "POLL_INTERVAL_SECS",
                        reason: "must be positive".to_string(),
                    });
                }
                Duration::from_secs(secs)
            }
            None => DEFAULT_POLL_INTERVAL,
        };

        let base_url = get("WORLDSTATE_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            discord_token,
            channel_id,
            platform,
            poll_interval,
            base_url,
        })
    }
}
