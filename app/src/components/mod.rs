//! UI Components
//!
//! The countdown table and the two modal forms. Components only render the
//! rows and drafts they are given and report clicks as `TrackerAction`s.

pub mod boss_forms;
pub mod boss_table;

pub use boss_forms::{AddBossForm, EditKillForm};
pub use boss_table::BossTable;
