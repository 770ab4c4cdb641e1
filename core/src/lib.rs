//! Boss respawn tracking
//!
//! Platform-independent half of the boss timer widget:
//! - **time_codec**: `"2h 30m"` parsing, `HH:MM:SS` formatting, clock-time math
//! - **roster**: the persisted `Boss` record and its derived status
//! - **store**: roster mirrored to a key-value storage slot
//! - **tracker**: widget state machine and table view model
//! - **config**: TOML widget settings

pub mod config;
pub mod roster;
pub mod serde_defaults;
pub mod store;
pub mod time_codec;
pub mod tracker;

pub use config::{ConfigError, TrackerConfig};
pub use roster::{Boss, BossStatus, default_roster};
pub use store::{BossStore, MemoryStorage, StateStorage, StoreError};
pub use time_codec::{format_duration, parse_clock_time, parse_duration};
pub use tracker::{
    AddBossDraft, BossRow, EditKillDraft, TrackerAction, TrackerError, TrackerState,
};
