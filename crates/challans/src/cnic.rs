//! National identity card number (CNIC) value object.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use parchi_core::{DomainError, DomainResult};

/// A CNIC, stored as its 13 normalized digits.
///
/// Input may carry `-` or space separators; they are stripped before the
/// length/digit check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cnic(String);

impl Cnic {
    pub fn parse(input: &str) -> DomainResult<Self> {
        let digits: String = input.chars().filter(|c| *c != '-' && *c != ' ').collect();

        if digits.len() != 13 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::invalid_record(
                "CNIC must be exactly 13 digits once separators are removed",
            ));
        }

        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Cnic {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Cnic {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Cnic {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Cnic> for String {
    fn from(value: Cnic) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_separators_before_validation() {
        let cnic = Cnic::parse("3520-1123456-71").unwrap();
        assert_eq!(cnic.as_str(), "3520112345671");

        let spaced = Cnic::parse("35201 123456 71").unwrap();
        assert_eq!(spaced, cnic);
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(Cnic::parse("12345").is_err());
        assert!(Cnic::parse("35201123456712").is_err());
        assert!(Cnic::parse("").is_err());
    }

    #[test]
    fn rejects_non_digits() {
        assert!(Cnic::parse("3520112345a71").is_err());
        assert!(Cnic::parse("3520_1123456_71").is_err());
    }
}
