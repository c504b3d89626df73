use serde::{Deserialize, Serialize};

use parchi_core::RollNumber;

use crate::Role;

/// Identity of the current caller, as produced by a credential verifier.
///
/// Request-scoped: handlers receive a `Principal` explicitly instead of
/// reading process-wide session state, so nothing leaks across requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    username: String,
    role: Role,
    roll_number: Option<RollNumber>,
}

impl Principal {
    /// A student principal; the roll number doubles as the ownership key.
    pub fn student(roll_number: RollNumber) -> Self {
        Self {
            username: roll_number.as_str().to_string(),
            role: Role::Student,
            roll_number: Some(roll_number),
        }
    }

    pub fn admin(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            role: Role::Admin,
            roll_number: None,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn roll_number(&self) -> Option<&RollNumber> {
        self.roll_number.as_ref()
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Whether this caller owns records filed under `roll`.
    pub fn owns(&self, roll: &RollNumber) -> bool {
        self.roll_number.as_ref() == Some(roll)
    }
}
