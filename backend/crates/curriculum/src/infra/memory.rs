//! In-Memory Module Store
//!
//! Test double for [`ModuleSource`].

use std::collections::HashMap;

use crate::domain::document::ModuleDocument;
use crate::domain::source::ModuleSource;
use crate::error::CurriculumResult;

/// In-memory module store
#[derive(Debug, Clone, Default)]
pub struct InMemoryModuleStore {
    documents: HashMap<String, ModuleDocument>,
}

impl InMemoryModuleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(module_id: impl Into<String>, document: ModuleDocument) -> Self {
        let mut store = Self::new();
        store.insert(module_id, document);
        store
    }

    pub fn insert(&mut self, module_id: impl Into<String>, document: ModuleDocument) {
        self.documents.insert(module_id.into(), document);
    }
}

impl ModuleSource for InMemoryModuleStore {
    async fn load(&self, module_id: &str) -> CurriculumResult<Option<ModuleDocument>> {
        Ok(self.documents.get(module_id).cloned())
    }
}
