//! Store error types

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised at the storage boundary
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// A record with the same value or content hash already exists
    #[error("String already exists in the system")]
    Duplicate {
        /// Content hash of the existing record
        content_hash: String,
    },

    /// Exact-value lookup missed
    #[error("String does not exist in the system")]
    NotFound,

    /// Snapshot persistence failure; in-memory state is unaffected
    #[error("Snapshot write failed: {0}")]
    Snapshot(String),

    /// Internal store failure (poisoned lock)
    #[error("Store internal error: {0}")]
    Internal(String),
}

impl StoreError {
    /// Duplicate error for an existing record's hash
    pub fn duplicate(content_hash: impl Into<String>) -> Self {
        Self::Duplicate {
            content_hash: content_hash.into(),
        }
    }

    /// Lock-poisoning error
    pub fn lock_poisoned() -> Self {
        Self::Internal("Lock poisoned".to_string())
    }
}
