//! Fine amount value object.

use serde::{Deserialize, Serialize};

use parchi_core::{DomainError, DomainResult};

/// Positive fine amount in whole rupees (minor-unit-free).
///
/// Immutable after creation: nothing in the lifecycle ever changes a
/// challan's amount.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u64", into = "u64")]
pub struct Amount(u64);

impl Amount {
    pub fn new(rupees: u64) -> DomainResult<Self> {
        if rupees == 0 {
            return Err(DomainError::validation("amount must be positive"));
        }
        Ok(Self(rupees))
    }

    pub fn rupees(&self) -> u64 {
        self.0
    }

    /// The amount as printed on the challan, e.g. `Rs. 1,500/-`.
    pub fn formatted(&self) -> String {
        format!("Rs. {}/-", group_thousands(self.0))
    }
}

impl core::fmt::Display for Amount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl TryFrom<u64> for Amount {
    type Error = DomainError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for u64 {
    fn from(value: Amount) -> Self {
        value.0
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
