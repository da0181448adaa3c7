//! Cross-cutting error types for the release tracker.
//!
//! Store errors (`DatabaseError`) live in `rtrack-db`; the CLI converges
//! everything into `anyhow::Error`.

use thiserror::Error;

/// Errors raised by the pure logic in this crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Record lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Input failed validation before reaching the store.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
