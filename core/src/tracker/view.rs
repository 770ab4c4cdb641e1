//! Table view model
//!
//! The countdown table is a pure function of the roster, the selection and
//! the current time. The app recomputes it on every refresh tick.

use std::fmt::Display;

use chrono::{DateTime, TimeZone};

use crate::roster::{Boss, BossStatus};
use crate::time_codec::{format_clock_time, format_duration, instant_from_millis};

/// Placeholder shown in the "Time Killed" column for bosses never killed
pub const NOT_KILLED: &str = "-";

/// One rendered table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BossRow {
    /// Position in the roster (used to address actions)
    pub index: usize,
    pub name: String,
    /// Local `HH:MM:SS` of the last kill, or `-`
    pub killed_at: String,
    /// `HH:MM:SS` until respawn while dead, blank otherwise
    pub countdown: String,
    /// Local `HH:MM:SS` the boss comes back, blank unless dead
    pub respawns_at: String,
    pub status: BossStatus,
    pub selected: bool,
}

impl BossRow {
    pub fn build<Tz>(index: usize, boss: &Boss, selected: bool, now: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let now_ms = now.timestamp_millis();
        let status = boss.status(now_ms);

        let killed_at = boss
            .killed_at
            .and_then(|ms| instant_from_millis(&now.timezone(), ms))
            .map(|at| format_clock_time(&at))
            .unwrap_or_else(|| NOT_KILLED.to_string());

        let countdown = match (status, boss.remaining_secs(now_ms)) {
            (BossStatus::Dead, Some(remaining)) => {
                format_duration(u64::try_from(remaining).unwrap_or_default())
            }
            _ => String::new(),
        };

        let respawns_at = match status {
            BossStatus::Dead => boss
                .respawns_at()
                .and_then(|ms| instant_from_millis(&now.timezone(), ms))
                .map(|at| format_clock_time(&at))
                .unwrap_or_default(),
            _ => String::new(),
        };

        Self {
            index,
            name: boss.name.clone(),
            killed_at,
            countdown,
            respawns_at,
            status,
            selected,
        }
    }

    /// "Killed" is disabled until a dead boss has respawned
    pub fn can_mark_killed(&self) -> bool {
        self.status != BossStatus::Dead
    }
}

/// Build every row of the table
pub fn build_rows<Tz>(bosses: &[Boss], selected: Option<usize>, now: &DateTime<Tz>) -> Vec<BossRow>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    bosses
        .iter()
        .enumerate()
        .map(|(index, boss)| BossRow::build(index, boss, selected == Some(index), now))
        .collect()
}
