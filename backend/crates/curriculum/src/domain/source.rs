//! Module Source Trait
//!
//! Interface for loading curriculum documents. Implementations live in the
//! infrastructure layer.

use crate::domain::document::ModuleDocument;
use crate::error::CurriculumResult;

/// Document source trait
///
/// `Ok(None)` covers both an absent document and one that fails to parse;
/// the two are indistinguishable to callers by design. `Err` is reserved
/// for genuine read failures.
#[trait_variant::make(ModuleSource: Send)]
pub trait LocalModuleSource {
    /// Load the document for a module id
    async fn load(&self, module_id: &str) -> CurriculumResult<Option<ModuleDocument>>;
}
