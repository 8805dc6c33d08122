//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use std::sync::Arc;

use crate::application::{ReportProgressInput, ReportProgressUseCase};
use crate::domain::repository::ProgressRepository;
use crate::error::ProgressResult;
use crate::presentation::dto::{MessageResponse, UpdateProgressRequest};

/// Shared state for progress handlers
#[derive(Clone)]
pub struct ProgressAppState<R>
where
    R: ProgressRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// POST /api/update-progress
pub async fn update_progress<R>(
    State(state): State<ProgressAppState<R>>,
    Json(req): Json<UpdateProgressRequest>,
) -> ProgressResult<Json<MessageResponse>>
where
    R: ProgressRepository + Clone + Send + Sync + 'static,
{
    let use_case = ReportProgressUseCase::new(state.repo.clone());

    use_case
        .execute(ReportProgressInput {
            user_id: req.user_id,
            module_id: req.module_id,
            progress: req.progress,
        })
        .await?;

    Ok(Json(MessageResponse {
        message: "Progress updated successfully".to_string(),
    }))
}
