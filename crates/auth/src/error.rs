use thiserror::Error;

/// Authentication boundary failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown user or wrong password; callers cannot tell which.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Hashing a new password failed.
    #[error("password hashing failed: {0}")]
    Hashing(String),
}
