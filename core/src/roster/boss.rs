//! Boss record and derived respawn state

use serde::{Deserialize, Serialize};

const MILLIS_PER_SEC: i64 = 1000;

/// A tracked boss as persisted in the roster snapshot.
///
/// Serialized as `{"name", "respawnSeconds", "killedAt"}`. Snapshots written
/// before the field was renamed used `respawn`, which is still accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Boss {
    pub name: String,

    /// Interval between a kill and the next spawn
    #[serde(alias = "respawn")]
    pub respawn_seconds: u64,

    /// Epoch milliseconds of the last recorded kill (`None` = never killed / reset)
    #[serde(default)]
    pub killed_at: Option<i64>,
}

/// Respawn state derived from a boss and the current time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BossStatus {
    /// Never killed, or reset
    Unset,
    /// Killed and still counting down
    Dead,
    /// Killed and the respawn interval has elapsed
    Ready,
}

impl BossStatus {
    /// Label for the status column
    pub fn label(&self) -> &'static str {
        match self {
            BossStatus::Unset => "",
            BossStatus::Dead => "DEAD",
            BossStatus::Ready => "READY",
        }
    }

    /// CSS modifier for the status cell
    pub fn css_class(&self) -> &'static str {
        match self {
            BossStatus::Unset => "unset",
            BossStatus::Dead => "dead",
            BossStatus::Ready => "ready",
        }
    }
}

impl Boss {
    /// Create a boss that has never been killed
    pub fn new(name: impl Into<String>, respawn_seconds: u64) -> Self {
        Self {
            name: name.into(),
            respawn_seconds,
            killed_at: None,
        }
    }

    /// Whole seconds since the last kill (floored)
    pub fn elapsed_secs(&self, now_ms: i64) -> Option<i64> {
        self.killed_at
            .map(|killed| now_ms.saturating_sub(killed).div_euclid(MILLIS_PER_SEC))
    }

    /// Seconds until respawn; zero or negative once the boss is up
    pub fn remaining_secs(&self, now_ms: i64) -> Option<i64> {
        let respawn = i64::try_from(self.respawn_seconds).unwrap_or(i64::MAX);
        self.elapsed_secs(now_ms)
            .map(|elapsed| respawn.saturating_sub(elapsed))
    }

    /// Epoch milliseconds at which the boss respawns
    pub fn respawns_at(&self) -> Option<i64> {
        let respawn_ms = i64::try_from(self.respawn_seconds)
            .unwrap_or(i64::MAX)
            .saturating_mul(MILLIS_PER_SEC);
        self.killed_at.map(|killed| killed.saturating_add(respawn_ms))
    }

    pub fn status(&self, now_ms: i64) -> BossStatus {
        match self.remaining_secs(now_ms) {
            None => BossStatus::Unset,
            Some(remaining) if remaining <= 0 => BossStatus::Ready,
            Some(_) => BossStatus::Dead,
        }
    }

    pub fn is_ready(&self, now_ms: i64) -> bool {
        self.status(now_ms) == BossStatus::Ready
    }
}
