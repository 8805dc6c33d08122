//! Domain Entities

use chrono::{DateTime, Utc};

/// Reported fraction at or above which a module counts as complete
pub const COMPLETION_THRESHOLD: f64 = 1.0;

/// One user's reconciled advancement through one module.
///
/// `completion_status` is derived from `progress` and is never settable on
/// its own; every constructor and mutator recomputes it. The fraction is
/// stored exactly as reported and is deliberately not clamped to [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressRecord {
    pub user_id: String,
    pub module_id: String,
    pub progress: f64,
    pub completion_status: bool,
    pub updated_at: DateTime<Utc>,
}

impl ProgressRecord {
    /// Create a record for a first report
    pub fn new(user_id: impl Into<String>, module_id: impl Into<String>, progress: f64) -> Self {
        Self {
            user_id: user_id.into(),
            module_id: module_id.into(),
            progress,
            completion_status: derive_completion(progress),
            updated_at: Utc::now(),
        }
    }

    /// Overwrite the fraction and rederive completion (last write wins)
    pub fn set_progress(&mut self, progress: f64) {
        self.progress = progress;
        self.completion_status = derive_completion(progress);
        self.updated_at = Utc::now();
    }
}

/// completion = progress >= 1.0
pub fn derive_completion(progress: f64) -> bool {
    progress >= COMPLETION_THRESHOLD
}
