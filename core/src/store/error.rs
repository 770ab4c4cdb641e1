//! Error types for roster storage and mutation

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("boss name must not be empty")]
    EmptyName,

    #[error("respawn time {input:?} does not contain a positive duration")]
    InvalidRespawn { input: String },

    #[error("failed to serialize boss roster")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write storage key {key}: {reason}")]
    Write { key: String, reason: String },
}

impl StoreError {
    /// Whether the error comes from rejected user input rather than storage
    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::EmptyName | StoreError::InvalidRespawn { .. })
    }
}
