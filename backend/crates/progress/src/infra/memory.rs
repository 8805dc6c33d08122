//! In-Memory Repository
//!
//! Test double for [`ProgressRepository`]. The map key is the
//! (user, module) pair, so pair-uniqueness holds by construction, exactly
//! like the database primary key.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::domain::entities::ProgressRecord;
use crate::domain::repository::ProgressRepository;
use crate::error::{ProgressError, ProgressResult};

type PairKey = (String, String);

/// In-memory progress repository
#[derive(Default)]
pub struct InMemoryProgressRepository {
    records: Mutex<HashMap<PairKey, ProgressRecord>>,
}

impl InMemoryProgressRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> ProgressResult<MutexGuard<'_, HashMap<PairKey, ProgressRecord>>> {
        self.records
            .lock()
            .map_err(|_| ProgressError::Internal("repository lock poisoned".to_string()))
    }

    /// Number of stored records (test assertions)
    pub fn record_count(&self) -> usize {
        self.records.lock().map(|g| g.len()).unwrap_or(0)
    }

    /// Synchronous lookup (test assertions)
    pub fn find_sync(&self, user_id: &str, module_id: &str) -> Option<ProgressRecord> {
        self.records
            .lock()
            .ok()?
            .get(&(user_id.to_string(), module_id.to_string()))
            .cloned()
    }
}

impl ProgressRepository for InMemoryProgressRepository {
    async fn find(&self, user_id: &str, module_id: &str) -> ProgressResult<Option<ProgressRecord>> {
        let records = self.guard()?;
        Ok(records
            .get(&(user_id.to_string(), module_id.to_string()))
            .cloned())
    }

    async fn upsert(&self, record: &ProgressRecord) -> ProgressResult<()> {
        let mut records = self.guard()?;
        records.insert(
            (record.user_id.clone(), record.module_id.clone()),
            record.clone(),
        );
        Ok(())
    }
}
