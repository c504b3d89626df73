//! Pure authorization checks.
//!
//! No IO, no panics, no business logic: given a principal, decide whether the
//! operation may proceed.

use parchi_core::{DomainError, DomainResult, RollNumber};

use crate::Principal;

/// Admin-only gate for review and reporting operations.
pub fn ensure_admin(principal: &Principal) -> DomainResult<()> {
    if principal.is_admin() {
        Ok(())
    } else {
        Err(DomainError::Unauthorized)
    }
}

/// Owner gate for student-scoped operations; admins pass unconditionally.
pub fn ensure_owner_or_admin(principal: &Principal, roll: &RollNumber) -> DomainResult<()> {
    if principal.is_admin() || principal.owns(roll) {
        Ok(())
    } else {
        Err(DomainError::Unauthorized)
    }
}
