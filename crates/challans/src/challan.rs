//! Challan record entity and its status lifecycle.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use parchi_core::{ChallanId, DomainError, DomainResult, RollNumber};

use crate::{Amount, Cnic, Semester};

/// Days a freshly issued challan stays payable.
///
/// Informational only: `valid_till` is printed on the document but never
/// enforced as an expiry gate anywhere in the lifecycle.
pub const VALIDITY_DAYS: i64 = 3;

// ─────────────────────────────────────────────────────────────────────────────
// Status state machine
// ─────────────────────────────────────────────────────────────────────────────

/// Challan status lifecycle.
///
/// `pending` is the initial state; `approved` and `rejected` are terminal.
/// No transition ever leads back to `pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallanStatus {
    Pending,
    Paid,
    Approved,
    Rejected,
}

impl ChallanStatus {
    pub const ALL: [ChallanStatus; 4] = [
        ChallanStatus::Pending,
        ChallanStatus::Paid,
        ChallanStatus::Approved,
        ChallanStatus::Rejected,
    ];

    /// Terminal states accept no further transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, ChallanStatus::Approved | ChallanStatus::Rejected)
    }

    /// Whether the state machine permits moving from here to `target`.
    ///
    /// `pending -> paid` and `paid -> paid` are receipt-upload transitions;
    /// `pending|paid -> approved|rejected` are admin review transitions.
    pub fn can_transition_to(self, target: ChallanStatus) -> bool {
        use ChallanStatus::*;
        match (self, target) {
            (Pending | Paid, Paid) => true,
            (Pending | Paid, Approved | Rejected) => true,
            _ => false,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ChallanStatus::Pending => "pending",
            ChallanStatus::Paid => "paid",
            ChallanStatus::Approved => "approved",
            ChallanStatus::Rejected => "rejected",
        }
    }
}

impl core::fmt::Display for ChallanStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for ChallanStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChallanStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown status: {s}")))
    }
}

/// Outcome of an admin review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewDecision {
    Approve,
    Reject,
}

impl ReviewDecision {
    pub fn target(self) -> ChallanStatus {
        match self {
            ReviewDecision::Approve => ChallanStatus::Approved,
            ReviewDecision::Reject => ChallanStatus::Rejected,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Intake
// ─────────────────────────────────────────────────────────────────────────────

/// What the student submits for a new challan.
///
/// Identity, timestamps and the initial status are assigned by the store at
/// creation; this struct carries only the form fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewChallan {
    pub student_name: String,
    pub roll_number: RollNumber,
    pub id_card_number: Cnic,
    pub semester: Semester,
    pub amount: Amount,
    pub reason: String,
}

impl NewChallan {
    /// Field-level rules checked before the record reaches the store.
    ///
    /// The typed fields (`Cnic`, `Amount`, `Semester`) are validated at
    /// construction; only the free-text fields remain to check here.
    pub fn validate(&self) -> DomainResult<()> {
        require_text("student_name", &self.student_name)?;
        require_text("roll_number", self.roll_number.as_str())?;
        require_text("reason", &self.reason)?;
        Ok(())
    }

    /// Materialize the record the store will hold.
    pub fn into_record(self, id: ChallanId, now: DateTime<Utc>) -> ChallanRecord {
        ChallanRecord {
            id,
            student_name: self.student_name,
            roll_number: self.roll_number,
            id_card_number: self.id_card_number,
            semester: self.semester,
            amount: self.amount,
            reason: self.reason,
            created_date: now,
            valid_till: now + Duration::days(VALIDITY_DAYS),
            status: ChallanStatus::Pending,
            receipt_path: None,
            admin_comments: None,
            updated_date: None,
        }
    }
}

fn require_text(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{field} must not be empty")));
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Record
// ─────────────────────────────────────────────────────────────────────────────

/// The central entity: one fine challan issued to a student.
///
/// Fields are private so every status mutation goes through the transition
/// methods below; a successful transition updates status, comments/receipt
/// and `updated_date` together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallanRecord {
    id: ChallanId,
    student_name: String,
    roll_number: RollNumber,
    id_card_number: Cnic,
    semester: Semester,
    amount: Amount,
    reason: String,
    created_date: DateTime<Utc>,
    valid_till: DateTime<Utc>,
    status: ChallanStatus,
    receipt_path: Option<String>,
    admin_comments: Option<String>,
    updated_date: Option<DateTime<Utc>>,
}

impl ChallanRecord {
    pub fn id(&self) -> ChallanId {
        self.id
    }

    pub fn student_name(&self) -> &str {
        &self.student_name
    }

    pub fn roll_number(&self) -> &RollNumber {
        &self.roll_number
    }

    pub fn id_card_number(&self) -> &Cnic {
        &self.id_card_number
    }

    pub fn semester(&self) -> Semester {
        self.semester
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn created_date(&self) -> DateTime<Utc> {
        self.created_date
    }

    pub fn valid_till(&self) -> DateTime<Utc> {
        self.valid_till
    }

    pub fn status(&self) -> ChallanStatus {
        self.status
    }

    pub fn receipt_path(&self) -> Option<&str> {
        self.receipt_path.as_deref()
    }

    pub fn admin_comments(&self) -> Option<&str> {
        self.admin_comments.as_deref()
    }

    pub fn updated_date(&self) -> Option<DateTime<Utc>> {
        self.updated_date
    }

    /// Generic status-change entry point used by the operations layer.
    ///
    /// Validates reachability per the transition table, then applies status,
    /// comments and `updated_date` in one go. Receipt references can only be
    /// set through [`ChallanRecord::attach_receipt`].
    pub fn apply_status_change(
        &mut self,
        target: ChallanStatus,
        comments: Option<String>,
        at: DateTime<Utc>,
    ) -> DomainResult<()> {
        self.ensure_transition(target)?;
        self.status = target;
        self.admin_comments = comments;
        self.updated_date = Some(at);
        Ok(())
    }

    /// Apply an admin review: `pending` and `paid` records may be approved or
    /// rejected; terminal records accept nothing further.
    pub fn review(
        &mut self,
        decision: ReviewDecision,
        comments: Option<String>,
        at: DateTime<Utc>,
    ) -> DomainResult<()> {
        self.apply_status_change(decision.target(), comments, at)
    }

    /// Record a successful receipt upload.
    ///
    /// Idempotent overwrite: a `paid` record takes the new reference and
    /// stays `paid`, so a re-upload always leaves the record pointing at the
    /// most recent reference.
    pub fn attach_receipt(
        &mut self,
        file_reference: impl Into<String>,
        at: DateTime<Utc>,
    ) -> DomainResult<()> {
        self.ensure_transition(ChallanStatus::Paid)?;
        self.status = ChallanStatus::Paid;
        self.receipt_path = Some(file_reference.into());
        self.updated_date = Some(at);
        Ok(())
    }

    fn ensure_transition(&self, target: ChallanStatus) -> DomainResult<()> {
        if !self.status.can_transition_to(target) {
            return Err(DomainError::invalid_transition(
                self.status.as_str(),
                target.as_str(),
            ));
        }
        Ok(())
    }
}
