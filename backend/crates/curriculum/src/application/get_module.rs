//! Get Module Use Case
//!
//! Serves a whole module document.

use std::sync::Arc;

use crate::domain::document::ModuleDocument;
use crate::domain::source::ModuleSource;
use crate::error::{CurriculumError, CurriculumResult};

/// Get module use case
pub struct GetModuleUseCase<S>
where
    S: ModuleSource,
{
    source: Arc<S>,
}

impl<S> GetModuleUseCase<S>
where
    S: ModuleSource,
{
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    pub async fn execute(&self, module_id: Option<String>) -> CurriculumResult<ModuleDocument> {
        let module_id = module_id.ok_or(CurriculumError::ModuleNotFound)?;

        self.source
            .load(&module_id)
            .await?
            .ok_or(CurriculumError::ModuleNotFound)
    }
}
