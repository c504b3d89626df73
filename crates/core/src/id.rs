//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identity of a challan record.
///
/// Assigned exactly once by the store (sequential, starting at 1), immutable
/// and never reused. An integer rather than a UUID: the challan number printed
/// on the document is derived from it.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ChallanId(i64);

impl ChallanId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for ChallanId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for ChallanId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<ChallanId> for i64 {
    fn from(value: ChallanId) -> Self {
        value.0
    }
}

impl FromStr for ChallanId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .parse::<i64>()
            .map_err(|e| DomainError::validation(format!("ChallanId: {e}")))?;
        Ok(Self(value))
    }
}

/// A student's enrollment identifier.
///
/// The sole ownership key for student-scoped queries; immutable once a record
/// carries it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RollNumber(String);

impl RollNumber {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for RollNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RollNumber {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RollNumber {
    fn from(value: String) -> Self {
        Self(value)
    }
}
