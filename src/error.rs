//! Error types for chorebot
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in chorebot
#[derive(Debug, Error)]
pub enum ChorebotError {
    /// Required configuration or credential is absent
    #[error("Missing configuration: {0}")]
    ConfigMissing(String),

    /// The channel automation collaborator failed
    #[error("Automation error: {0}")]
    Automation(String),

    /// Journal entry could not be persisted
    #[error("Journal error: {0}")]
    Journal(String),

    /// Artifact publish (commit/push) failed
    #[error("Publish error: {0}")]
    Publish(String),

    /// Counter or journal storage error
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for chorebot operations
pub type Result<T> = std::result::Result<T, ChorebotError>;
