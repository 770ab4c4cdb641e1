//! Common serde default value functions
//!
//! Used by `TrackerConfig` so a partial config file keeps the remaining defaults.

/// Heading shown above the table
pub fn default_title() -> String {
    "Cheesecake Boss Spawn Timer".to_string()
}

/// Storage slot holding the roster snapshot
pub fn default_storage_key() -> String {
    "bossState".to_string()
}

/// Countdown refresh period
pub fn default_tick_interval_ms() -> u32 {
    1000
}
