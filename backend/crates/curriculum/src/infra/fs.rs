//! Filesystem Module Store
//!
//! Loads `{modules_dir}/Module_{id}.json` per request. Documents are
//! immutable per deployment, so re-reading never observes a torn state.

use std::path::PathBuf;

use crate::application::config::CurriculumConfig;
use crate::domain::document::ModuleDocument;
use crate::domain::source::ModuleSource;
use crate::error::{CurriculumError, CurriculumResult};

/// Filesystem-backed module store
#[derive(Debug, Clone)]
pub struct FsModuleStore {
    modules_dir: PathBuf,
}

impl FsModuleStore {
    pub fn new(config: CurriculumConfig) -> Self {
        Self {
            modules_dir: config.modules_dir,
        }
    }

    fn document_path(&self, module_id: &str) -> Option<PathBuf> {
        // Ids carrying path components would escape the modules directory
        if module_id.contains('/') || module_id.contains('\\') || module_id.contains("..") {
            return None;
        }

        Some(self.modules_dir.join(format!("Module_{module_id}.json")))
    }
}

impl ModuleSource for FsModuleStore {
    async fn load(&self, module_id: &str) -> CurriculumResult<Option<ModuleDocument>> {
        let Some(path) = self.document_path(module_id) else {
            return Ok(None);
        };

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(CurriculumError::Storage(e)),
        };

        match serde_json::from_slice::<ModuleDocument>(&bytes) {
            Ok(document) => Ok(Some(document)),
            Err(e) => {
                // Malformed documents are indistinguishable from absent ones
                tracing::warn!(
                    module_id = %module_id,
                    error = %e,
                    "Malformed module document"
                );
                Ok(None)
            }
        }
    }
}
