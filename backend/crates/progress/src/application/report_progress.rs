//! Report Progress Use Case
//!
//! Reconciles a reported completion fraction against the stored record for
//! the (user, module) pair. Last write wins: an out-of-order report may
//! lower a previously higher value, and that is accepted.

use std::sync::Arc;

use crate::domain::entities::ProgressRecord;
use crate::domain::repository::ProgressRepository;
use crate::error::{ProgressError, ProgressResult};

/// Report progress input
///
/// All three fields must be present; empty-string ids count as missing.
/// The fraction is accepted over the full numeric range the caller sends.
pub struct ReportProgressInput {
    pub user_id: Option<String>,
    pub module_id: Option<String>,
    pub progress: Option<f64>,
}

/// Report progress use case
pub struct ReportProgressUseCase<R>
where
    R: ProgressRepository,
{
    repo: Arc<R>,
}

impl<R> ReportProgressUseCase<R>
where
    R: ProgressRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: ReportProgressInput) -> ProgressResult<ProgressRecord> {
        let user_id = match input.user_id {
            Some(id) if !id.is_empty() => id,
            _ => return Err(ProgressError::MissingFields),
        };
        let module_id = match input.module_id {
            Some(id) if !id.is_empty() => id,
            _ => return Err(ProgressError::MissingFields),
        };
        let progress = input.progress.ok_or(ProgressError::MissingFields)?;

        // One logical read-modify-write: the record is rebuilt from the
        // report and written in a single atomic upsert.
        let record = ProgressRecord::new(user_id, module_id, progress);
        self.repo.upsert(&record).await?;

        tracing::info!(
            user_id = %record.user_id,
            module_id = %record.module_id,
            progress = record.progress,
            completed = record.completion_status,
            "Progress updated"
        );

        Ok(record)
    }
}
