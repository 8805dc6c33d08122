//! Repository Trait
//!
//! Interface for progress persistence. Implementations live in the
//! infrastructure layer.

use crate::domain::entities::ProgressRecord;
use crate::error::ProgressResult;

/// Progress repository trait
#[trait_variant::make(ProgressRepository: Send)]
pub trait LocalProgressRepository {
    /// Find the record for a (user, module) pair
    async fn find(&self, user_id: &str, module_id: &str) -> ProgressResult<Option<ProgressRecord>>;

    /// Write the record, replacing any existing one for the pair.
    ///
    /// Must be atomic: concurrent upserts for the same pair may not
    /// produce two rows, and a reader never sees a row whose completion
    /// flag disagrees with its fraction.
    async fn upsert(&self, record: &ProgressRecord) -> ProgressResult<()>;
}
