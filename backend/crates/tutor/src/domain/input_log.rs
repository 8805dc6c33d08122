//! Input Log Trait
//!
//! Record-keeping sink for submitted inputs. Writes are best-effort; the
//! caller decides whether a failure matters (for `/api/process` it never
//! does).

use crate::error::TutorResult;

/// A logged submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRecord {
    pub text: String,
    pub submission_type: String,
}

/// Input log trait
#[trait_variant::make(InputLog: Send)]
pub trait LocalInputLog {
    /// Append one submission to the log
    async fn record(&self, entry: &InputRecord) -> TutorResult<()>;
}
