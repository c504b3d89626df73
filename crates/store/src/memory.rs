//! In-memory reference implementation of [`ChallanStore`].

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};

use parchi_challans::{ChallanRecord, ChallanStatus, NewChallan};
use parchi_core::{ChallanId, DomainError, RollNumber};

use crate::error::{StoreError, StoreResult};
use crate::store::{ChallanStats, ChallanStore};

/// In-memory challan store.
///
/// Intended for tests and single-process deployments. Identity is a
/// monotonically increasing counter starting at 1; ids are never reused and
/// records are never deleted. Every write happens under one lock, which is
/// what makes each individual transition atomic.
#[derive(Debug)]
pub struct InMemoryChallanStore {
    records: RwLock<HashMap<ChallanId, ChallanRecord>>,
    next_id: AtomicI64,
}

impl InMemoryChallanStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    fn sorted_newest_first(mut records: Vec<ChallanRecord>) -> Vec<ChallanRecord> {
        records.sort_by(|a, b| {
            b.created_date()
                .cmp(&a.created_date())
                .then(b.id().cmp(&a.id()))
        });
        records
    }
}

impl Default for InMemoryChallanStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ChallanStore for InMemoryChallanStore {
    fn create(&self, challan: NewChallan, now: DateTime<Utc>) -> StoreResult<ChallanRecord> {
        let id = ChallanId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let record = challan.into_record(id, now);

        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::Storage("lock poisoned".to_string()))?;
        records.insert(id, record.clone());
        Ok(record)
    }

    fn get(&self, id: ChallanId) -> StoreResult<ChallanRecord> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::Storage("lock poisoned".to_string()))?;
        records
            .get(&id)
            .cloned()
            .ok_or(StoreError::Domain(DomainError::RecordNotFound))
    }

    fn list_by_owner(&self, roll: &RollNumber) -> StoreResult<Vec<ChallanRecord>> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::Storage("lock poisoned".to_string()))?;
        let owned = records
            .values()
            .filter(|record| record.roll_number() == roll)
            .cloned()
            .collect();
        Ok(Self::sorted_newest_first(owned))
    }

    fn list_all(&self, limit: Option<usize>) -> StoreResult<Vec<ChallanRecord>> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::Storage("lock poisoned".to_string()))?;
        let mut all = Self::sorted_newest_first(records.values().cloned().collect());
        if let Some(limit) = limit {
            all.truncate(limit);
        }
        Ok(all)
    }

    fn update_status(
        &self,
        id: ChallanId,
        status: ChallanStatus,
        comments: Option<String>,
        updated: DateTime<Utc>,
    ) -> StoreResult<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::Storage("lock poisoned".to_string()))?;
        let record = records
            .get_mut(&id)
            .ok_or(StoreError::Domain(DomainError::RecordNotFound))?;
        record.apply_status_change(status, comments, updated)?;
        Ok(())
    }

    fn update_receipt(
        &self,
        id: ChallanId,
        file_reference: &str,
        updated: DateTime<Utc>,
    ) -> StoreResult<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::Storage("lock poisoned".to_string()))?;
        let record = records
            .get_mut(&id)
            .ok_or(StoreError::Domain(DomainError::RecordNotFound))?;
        record.attach_receipt(file_reference, updated)?;
        Ok(())
    }

    fn aggregate_stats(&self) -> StoreResult<ChallanStats> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::Storage("lock poisoned".to_string()))?;
        Ok(ChallanStats::from_records(records.values()))
    }
}
