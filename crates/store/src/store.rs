//! Persistence collaborator interface and aggregate statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use parchi_challans::{ChallanRecord, ChallanStatus, NewChallan};
use parchi_core::{ChallanId, RollNumber};

use crate::error::StoreResult;

/// Persistence collaborator for challan records.
///
/// Implementations apply updates through the record's own transition methods
/// under their write lock, so every update is atomic and legal: status,
/// comments/receipt and the updated timestamp land together or not at all,
/// and a reader never observes a new status with a stale timestamp. Records
/// are never deleted.
pub trait ChallanStore: Send + Sync {
    /// Assign a fresh identity and persist a validated intake.
    ///
    /// Identities are assigned exactly once and never reused.
    fn create(&self, challan: NewChallan, now: DateTime<Utc>) -> StoreResult<ChallanRecord>;

    /// Fetch one record; `RecordNotFound` for unknown identities.
    fn get(&self, id: ChallanId) -> StoreResult<ChallanRecord>;

    /// Records owned by `roll`, newest first.
    fn list_by_owner(&self, roll: &RollNumber) -> StoreResult<Vec<ChallanRecord>>;

    /// All records, newest first, optionally truncated to `limit`.
    fn list_all(&self, limit: Option<usize>) -> StoreResult<Vec<ChallanRecord>>;

    /// Replace status, comments and the updated timestamp in one write.
    fn update_status(
        &self,
        id: ChallanId,
        status: ChallanStatus,
        comments: Option<String>,
        updated: DateTime<Utc>,
    ) -> StoreResult<()>;

    /// Replace the receipt reference (and the `paid` status) in one write.
    fn update_receipt(
        &self,
        id: ChallanId,
        file_reference: &str,
        updated: DateTime<Utc>,
    ) -> StoreResult<()>;

    /// Recompute the aggregate view over the whole record set.
    fn aggregate_stats(&self) -> StoreResult<ChallanStats>;
}

/// Aggregate statistics over the record set.
///
/// Derived and read-only: recomputed from the current records on demand, no
/// independent state. Per-status counts always sum to `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ChallanStats {
    pub total: usize,
    pub pending: usize,
    pub paid: usize,
    pub approved: usize,
    pub rejected: usize,
    /// Sum of `amount` over all records, in rupees.
    pub total_amount: u64,
}

impl ChallanStats {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a ChallanRecord>) -> Self {
        let mut stats = ChallanStats::default();
        for record in records {
            stats.total += 1;
            stats.total_amount += record.amount().rupees();
            match record.status() {
                ChallanStatus::Pending => stats.pending += 1,
                ChallanStatus::Paid => stats.paid += 1,
                ChallanStatus::Approved => stats.approved += 1,
                ChallanStatus::Rejected => stats.rejected += 1,
            }
        }
        stats
    }

    pub fn count_for(&self, status: ChallanStatus) -> usize {
        match status {
            ChallanStatus::Pending => self.pending,
            ChallanStatus::Paid => self.paid,
            ChallanStatus::Approved => self.approved,
            ChallanStatus::Rejected => self.rejected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use parchi_challans::{Amount, Cnic, ReviewDecision, Semester};

    fn record(id: i64, rupees: u64, decision: Option<ReviewDecision>) -> ChallanRecord {
        let mut record = NewChallan {
            student_name: format!("Student {id}"),
            roll_number: RollNumber::new(format!("2021-CS-{id:03}")),
            id_card_number: Cnic::parse("3520112345671").unwrap(),
            semester: Semester::First,
            amount: Amount::new(rupees).unwrap(),
            reason: "Late Submission".to_string(),
        }
        .into_record(ChallanId::new(id), Utc::now());

        if let Some(decision) = decision {
            record.review(decision, None, Utc::now()).unwrap();
        }
        record
    }

    #[test]
    fn counts_sum_to_total_and_amounts_add_up() {
        let records = vec![
            record(1, 500, None),
            record(2, 250, Some(ReviewDecision::Approve)),
            record(3, 1000, Some(ReviewDecision::Reject)),
            record(4, 750, None),
        ];

        let stats = ChallanStats::from_records(&records);
        assert_eq!(stats.total, 4);
        assert_eq!(
            stats.pending + stats.paid + stats.approved + stats.rejected,
            stats.total
        );
        assert_eq!(stats.total_amount, 2500);
        assert_eq!(stats.count_for(ChallanStatus::Pending), 2);
        assert_eq!(stats.count_for(ChallanStatus::Approved), 1);
        assert_eq!(stats.count_for(ChallanStatus::Rejected), 1);
    }

    #[test]
    fn empty_record_set_is_all_zero() {
        let stats = ChallanStats::from_records([]);
        assert_eq!(stats, ChallanStats::default());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// For any record set the per-status counts partition the total.
            #[test]
            fn counts_always_partition_the_total(
                specs in proptest::collection::vec((1u64..10_000, 0usize..3), 0..40)
            ) {
                let records: Vec<ChallanRecord> = specs
                    .iter()
                    .enumerate()
                    .map(|(i, (rupees, decision))| {
                        let decision = match decision {
                            0 => None,
                            1 => Some(ReviewDecision::Approve),
                            _ => Some(ReviewDecision::Reject),
                        };
                        record(i as i64 + 1, *rupees, decision)
                    })
                    .collect();

                let stats = ChallanStats::from_records(&records);
                prop_assert_eq!(stats.total, records.len());
                prop_assert_eq!(
                    stats.pending + stats.paid + stats.approved + stats.rejected,
                    stats.total
                );
                prop_assert_eq!(
                    stats.total_amount,
                    records.iter().map(|r| r.amount().rupees()).sum::<u64>()
                );
            }
        }
    }
}
