//! Application error types

use std::path::PathBuf;

use thiserror::Error;

/// Failures reported by host collaborators.
#[derive(Debug, Error)]
pub enum HostError {
    /// A static resource could not be read.
    #[error("failed to read resource {path}: {message}")]
    Resource {
        /// Path relative to the resource root.
        path: PathBuf,
        /// Underlying failure.
        message: String,
    },

    /// The host refused to open a panel.
    #[error("failed to open panel: {0}")]
    Panel(String),

    /// The request view could not be opened.
    #[error("failed to open request view: {0}")]
    RequestView(String),
}

/// Result type alias for host operations.
pub type HostResult<T> = Result<T, HostError>;
