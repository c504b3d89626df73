//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic business failures (validation, lifecycle
/// rules, ownership). Storage faults belong to `parchi-store`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field failed a validation rule before reaching the state machine.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A required field was missing or malformed at creation or render time.
    #[error("invalid record: {0}")]
    InvalidRecord(String),

    /// A status change not permitted from the record's current state.
    #[error("invalid transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    /// No record carries the requested identity.
    #[error("record not found")]
    RecordNotFound,

    /// The caller may not perform the operation.
    #[error("unauthorized")]
    Unauthorized,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_record(msg: impl Into<String>) -> Self {
        Self::InvalidRecord(msg.into())
    }

    pub fn invalid_transition(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::InvalidTransition {
            from: from.into(),
            to: to.into(),
        }
    }
}
