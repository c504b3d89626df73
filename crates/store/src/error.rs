use thiserror::Error;

use parchi_core::DomainError;

/// Result type for store-layer operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level failure.
///
/// Domain rule violations pass through unchanged; storage faults are a
/// distinct kind and always fatal to the current operation (no partial
/// commit, no retry).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Persistence-layer failure (lock poisoning, backend faults).
    #[error("storage failure: {0}")]
    Storage(String),

    /// Filesystem failure while saving a receipt.
    #[error("io failure: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// The domain error carried by this failure, if any.
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            StoreError::Domain(err) => Some(err),
            _ => None,
        }
    }
}
