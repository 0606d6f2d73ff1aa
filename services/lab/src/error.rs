//! services/lab/src/error.rs
//!
//! Defines the primary error type for the entire lab service.

use crate::config::ConfigError;
use physics_lab_core::ports::PortError;

/// The primary error type for the `lab` service.
#[derive(Debug, thiserror::Error)]
pub enum LabError {
    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Represents an error that propagated up from one of the core repository ports.
    #[error("Repository error: {0}")]
    Port(#[from] PortError),

    /// Input rejected before reaching a repository (blank, non-numeric, duplicate...).
    #[error("Validation error: {0}")]
    Validation(String),

    /// No logged-in user, or the user's role does not allow the operation.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Represents a malformed console command or an encoding failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Represents a standard Input/Output error on the console streams.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type LabResult<T> = Result<T, LabError>;
