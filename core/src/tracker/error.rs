//! Error types for tracker actions

use thiserror::Error;

use crate::store::StoreError;

/// Guidance shown when the add form is rejected
pub const ADD_BOSS_GUIDANCE: &str = "Please enter valid boss name and respawn time (e.g. 2h 30m)";

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("{}", ADD_BOSS_GUIDANCE)]
    InvalidBoss(#[source] StoreError),

    #[error("Please enter a valid kill time (HH:MM), got {input:?}")]
    InvalidClockTime { input: String },

    #[error("failed to save boss roster")]
    Storage(#[source] StoreError),
}

impl TrackerError {
    /// Whether the error should be shown to the user (rejected input)
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            TrackerError::InvalidBoss(_) | TrackerError::InvalidClockTime { .. }
        )
    }
}

impl From<StoreError> for TrackerError {
    fn from(err: StoreError) -> Self {
        if err.is_validation() {
            TrackerError::InvalidBoss(err)
        } else {
            TrackerError::Storage(err)
        }
    }
}
