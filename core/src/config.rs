//! Widget configuration
//!
//! Read from a TOML document; every field is optional.
//!
//! ```toml
//! title = "Cheesecake Boss Spawn Timer"
//! storage_key = "bossState"
//! tick_interval_ms = 1000
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::serde_defaults::{default_storage_key, default_tick_interval_ms, default_title};

/// Shortest refresh period honored, whatever the config says
pub const MIN_TICK_INTERVAL_MS: u32 = 100;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse tracker config")]
    ParseToml(#[source] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Countdown refresh period in milliseconds
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            storage_key: default_storage_key(),
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

impl TrackerConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(ConfigError::ParseToml)
    }

    /// Refresh period clamped to `MIN_TICK_INTERVAL_MS`
    pub fn tick_interval(&self) -> u32 {
        self.tick_interval_ms.max(MIN_TICK_INTERVAL_MS)
    }
}
