//! Get Part Use Case
//!
//! Serves one part's questions together with the owning module's title.

use std::sync::Arc;

use crate::domain::document::PartSlice;
use crate::domain::source::ModuleSource;
use crate::error::{CurriculumError, CurriculumResult};

/// Get part use case
pub struct GetPartUseCase<S>
where
    S: ModuleSource,
{
    source: Arc<S>,
}

impl<S> GetPartUseCase<S>
where
    S: ModuleSource,
{
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// A missing module, a missing part, and an empty part all produce the
    /// same `PartNotFound`.
    pub async fn execute(
        &self,
        module_id: Option<String>,
        part_id: Option<String>,
    ) -> CurriculumResult<PartSlice> {
        let module_id = module_id.ok_or(CurriculumError::PartNotFound)?;
        let part_id = part_id.ok_or(CurriculumError::PartNotFound)?;

        let document = self
            .source
            .load(&module_id)
            .await?
            .ok_or(CurriculumError::PartNotFound)?;

        document
            .part_slice(&module_id, &part_id)
            .ok_or(CurriculumError::PartNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::InMemoryModuleStore;

    fn store() -> Arc<InMemoryModuleStore> {
        let doc = serde_json::from_str(
            r#"{
                "modules": {
                    "m1": {
                        "title": "Fractions",
                        "parts": {
                            "p1": {"questions": [{"prompt": "1/2 + 1/3 = ?"}]},
                            "p2": {"questions": []}
                        }
                    }
                }
            }"#,
        )
        .unwrap();
        Arc::new(InMemoryModuleStore::with_document("m1", doc))
    }

    #[tokio::test]
    async fn test_get_part_found() {
        let use_case = GetPartUseCase::new(store());
        let slice = use_case
            .execute(Some("m1".to_string()), Some("p1".to_string()))
            .await
            .unwrap();
        assert_eq!(slice.title, "Fractions");
        assert_eq!(slice.questions.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_part_matches_missing_module() {
        let use_case = GetPartUseCase::new(store());

        let missing_part = use_case
            .execute(Some("m1".to_string()), Some("p9".to_string()))
            .await;
        let missing_module = use_case
            .execute(Some("m9".to_string()), Some("p1".to_string()))
            .await;

        assert!(matches!(missing_part, Err(CurriculumError::PartNotFound)));
        assert!(matches!(missing_module, Err(CurriculumError::PartNotFound)));
    }

    #[tokio::test]
    async fn test_empty_part_is_not_found() {
        let use_case = GetPartUseCase::new(store());
        let result = use_case
            .execute(Some("m1".to_string()), Some("p2".to_string()))
            .await;
        assert!(matches!(result, Err(CurriculumError::PartNotFound)));
    }
}
