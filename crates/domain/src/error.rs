//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The request URL is empty.
    #[error("URL is required")]
    EmptyUrl,

    /// The panel key does not name a known panel.
    #[error("unknown panel target: {0}")]
    UnknownPanelTarget(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
