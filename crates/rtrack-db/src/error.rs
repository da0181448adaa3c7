//! Database error types for rtrack-db.

use rtrack_core::errors::CoreError;
use thiserror::Error;

/// Errors from store operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed or returned malformed data.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// A write or lookup targeted a row that does not exist.
    #[error("Not found: {table} {id}")]
    NotFound { table: String, id: String },

    /// Input rejected before any store call.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The first part of a multi-step operation was persisted, a later part
    /// failed. Nothing is rolled back.
    #[error("{message}")]
    PartialFailure {
        operation: &'static str,
        message: String,
    },

    /// Invalid state encountered (e.g., bad data in DB).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DatabaseError {
    /// Whether the error left some of the requested writes applied.
    #[must_use]
    pub const fn is_partial(&self) -> bool {
        matches!(self, Self::PartialFailure { .. })
    }
}

impl From<CoreError> for DatabaseError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(message) => Self::Validation(message),
            CoreError::NotFound { entity_type, id } => Self::NotFound {
                table: entity_type,
                id,
            },
            CoreError::Other(other) => Self::Other(other),
        }
    }
}
