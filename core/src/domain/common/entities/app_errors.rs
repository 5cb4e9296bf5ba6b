use thiserror::Error;

/// Errors surfaced by the core to the transport layer.
///
/// Messages are safe to show to clients: store failures are logged where they
/// happen and collapse into [`CoreError::StoreError`] without driver detail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error("Conflicting filters: {0}")]
    FilterConflict(String),

    #[error("{0}")]
    DuplicateEntity(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Internal server error")]
    StoreError,
}
