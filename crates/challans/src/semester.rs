//! Academic semester enumeration.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use parchi_core::DomainError;

/// One of the eight ordered semesters a student can be enrolled in.
///
/// Serialized with the labels the intake form uses ("1st Semester" ..
/// "8th Semester").
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Semester {
    #[serde(rename = "1st Semester")]
    First,
    #[serde(rename = "2nd Semester")]
    Second,
    #[serde(rename = "3rd Semester")]
    Third,
    #[serde(rename = "4th Semester")]
    Fourth,
    #[serde(rename = "5th Semester")]
    Fifth,
    #[serde(rename = "6th Semester")]
    Sixth,
    #[serde(rename = "7th Semester")]
    Seventh,
    #[serde(rename = "8th Semester")]
    Eighth,
}

impl Semester {
    pub const ALL: [Semester; 8] = [
        Semester::First,
        Semester::Second,
        Semester::Third,
        Semester::Fourth,
        Semester::Fifth,
        Semester::Sixth,
        Semester::Seventh,
        Semester::Eighth,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Semester::First => "1st Semester",
            Semester::Second => "2nd Semester",
            Semester::Third => "3rd Semester",
            Semester::Fourth => "4th Semester",
            Semester::Fifth => "5th Semester",
            Semester::Sixth => "6th Semester",
            Semester::Seventh => "7th Semester",
            Semester::Eighth => "8th Semester",
        }
    }

    /// 1-based ordinal, e.g. 3 for the 3rd semester.
    pub fn number(self) -> u8 {
        self as u8 + 1
    }
}

impl core::fmt::Display for Semester {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Semester {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Semester::ALL
            .into_iter()
            .find(|semester| semester.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown semester: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semesters_are_ordered() {
        assert!(Semester::First < Semester::Eighth);
        assert_eq!(Semester::Third.number(), 3);
    }

    #[test]
    fn parses_form_labels() {
        assert_eq!("3rd Semester".parse::<Semester>().unwrap(), Semester::Third);
        assert!("9th Semester".parse::<Semester>().is_err());
    }
}
