//! Operations layer: lifecycle operations over a persistence collaborator.
//!
//! Every handler receives the caller's [`Principal`] explicitly (request
//! scoped, never process-wide state) and decides ownership/role policy before
//! touching the store. Transitions themselves are applied atomically by the
//! store through the record's domain methods.

use chrono::Utc;
use tracing::info;

use parchi_auth::{Principal, ensure_admin, ensure_owner_or_admin};
use parchi_challans::{ChallanRecord, ChallanStatus, NewChallan, ReviewDecision};
use parchi_core::{ChallanId, RollNumber};

use crate::error::StoreResult;
use crate::store::{ChallanStats, ChallanStore};

/// Challan operations over a persistence collaborator.
pub struct ChallanService<S> {
    store: S,
}

impl<S: ChallanStore> ChallanService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Intake: validate the submission, assign identity, stamp timestamps,
    /// start `pending`.
    ///
    /// Students can only file challans under their own roll number.
    pub fn issue(&self, principal: &Principal, challan: NewChallan) -> StoreResult<ChallanRecord> {
        ensure_owner_or_admin(principal, &challan.roll_number)?;
        challan.validate()?;

        let record = self.store.create(challan, Utc::now())?;
        info!(id = %record.id(), roll = %record.roll_number(), "challan issued");
        Ok(record)
    }

    /// Generic status change (admin only).
    ///
    /// Fails `RecordNotFound` for unknown identities and `InvalidTransition`
    /// when the current state is terminal or the target is unreachable. On
    /// success status, comments and `updated_date` are persisted in a single
    /// write.
    pub fn apply_status_change(
        &self,
        principal: &Principal,
        id: ChallanId,
        target: ChallanStatus,
        comments: Option<String>,
    ) -> StoreResult<ChallanRecord> {
        ensure_admin(principal)?;

        self.store.update_status(id, target, comments, Utc::now())?;
        let record = self.store.get(id)?;
        info!(id = %id, status = %record.status(), "challan status changed");
        Ok(record)
    }

    /// Admin review shorthand for [`ChallanService::apply_status_change`].
    pub fn review(
        &self,
        principal: &Principal,
        id: ChallanId,
        decision: ReviewDecision,
        comments: Option<String>,
    ) -> StoreResult<ChallanRecord> {
        self.apply_status_change(principal, id, decision.target(), comments)
    }

    /// Receipt-upload side effect: `pending|paid -> paid`.
    ///
    /// Idempotent overwrite: a second upload succeeds and leaves the record
    /// pointing at the most recent reference. Not an admin action; the
    /// uploading student must own the record.
    pub fn apply_receipt_upload(
        &self,
        principal: &Principal,
        id: ChallanId,
        file_reference: &str,
    ) -> StoreResult<ChallanRecord> {
        let record = self.store.get(id)?;
        ensure_owner_or_admin(principal, record.roll_number())?;

        self.store.update_receipt(id, file_reference, Utc::now())?;
        let record = self.store.get(id)?;
        info!(id = %id, "receipt uploaded");
        Ok(record)
    }

    /// Records owned by `roll`; students can only query their own.
    pub fn challans_for(
        &self,
        principal: &Principal,
        roll: &RollNumber,
    ) -> StoreResult<Vec<ChallanRecord>> {
        ensure_owner_or_admin(principal, roll)?;
        self.store.list_by_owner(roll)
    }

    /// All records, newest first (admin only).
    pub fn all_challans(
        &self,
        principal: &Principal,
        limit: Option<usize>,
    ) -> StoreResult<Vec<ChallanRecord>> {
        ensure_admin(principal)?;
        self.store.list_all(limit)
    }

    /// The aggregate dashboard view (admin only).
    pub fn stats(&self, principal: &Principal) -> StoreResult<ChallanStats> {
        ensure_admin(principal)?;
        self.store.aggregate_stats()
    }
}
