//! HTTP Handlers

use axum::Json;
use axum::extract::{Query, State};
use std::sync::Arc;

use crate::application::{GetModuleUseCase, GetPartUseCase};
use crate::domain::document::{ModuleDocument, PartSlice};
use crate::domain::source::ModuleSource;
use crate::error::CurriculumResult;
use crate::presentation::dto::{GetModuleQuery, GetPartQuery};

/// Shared state for curriculum handlers
#[derive(Clone)]
pub struct CurriculumAppState<S>
where
    S: ModuleSource + Clone + Send + Sync + 'static,
{
    pub source: Arc<S>,
}

/// GET /api/getmodule?module=<id>
pub async fn get_module<S>(
    State(state): State<CurriculumAppState<S>>,
    Query(query): Query<GetModuleQuery>,
) -> CurriculumResult<Json<ModuleDocument>>
where
    S: ModuleSource + Clone + Send + Sync + 'static,
{
    let use_case = GetModuleUseCase::new(state.source.clone());
    let document = use_case.execute(query.module).await?;

    Ok(Json(document))
}

/// GET /api/get_tutor_response?module=<id>&part=<id>
pub async fn get_tutor_response<S>(
    State(state): State<CurriculumAppState<S>>,
    Query(query): Query<GetPartQuery>,
) -> CurriculumResult<Json<PartSlice>>
where
    S: ModuleSource + Clone + Send + Sync + 'static,
{
    let use_case = GetPartUseCase::new(state.source.clone());
    let slice = use_case.execute(query.module, query.part).await?;

    Ok(Json(slice))
}
