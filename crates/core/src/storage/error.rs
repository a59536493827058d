use thiserror::Error;

/// Errors that can occur during repository operations.
///
/// Lookups by id never produce `NotFound`; they return `Option`/`bool`.
/// The variant exists for callers that turn a missing row into an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("{entity_type} constraint violated: {detail}")]
    ConstraintViolation {
        entity_type: &'static str,
        detail: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
