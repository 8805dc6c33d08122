//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use serde_json::Value;
use std::sync::Arc;

use crate::application::{ProcessInputInput, ProcessInputUseCase, RecognizeDrawingUseCase};
use crate::domain::engine::SolverEngine;
use crate::domain::input_log::InputLog;
use crate::domain::recognizer::{RecognitionRequest, Recognizer};
use crate::error::TutorResult;
use crate::presentation::dto::{ProcessDrawingRequest, ProcessRequest, ProcessResponse};

/// Shared state for tutor handlers
pub struct TutorAppState<E, C, L>
where
    E: SolverEngine + Send + Sync + 'static,
    C: Recognizer + Send + Sync + 'static,
    L: InputLog + Send + Sync + 'static,
{
    pub engine: Arc<E>,
    pub recognizer: Arc<C>,
    pub input_log: Arc<L>,
}

impl<E, C, L> Clone for TutorAppState<E, C, L>
where
    E: SolverEngine + Send + Sync + 'static,
    C: Recognizer + Send + Sync + 'static,
    L: InputLog + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            engine: self.engine.clone(),
            recognizer: self.recognizer.clone(),
            input_log: self.input_log.clone(),
        }
    }
}

/// POST /api/process
pub async fn process<E, C, L>(
    State(state): State<TutorAppState<E, C, L>>,
    Json(req): Json<ProcessRequest>,
) -> TutorResult<Json<ProcessResponse>>
where
    E: SolverEngine + Send + Sync + 'static,
    C: Recognizer + Send + Sync + 'static,
    L: InputLog + Send + Sync + 'static,
{
    let use_case = ProcessInputUseCase::new(state.engine.clone(), state.input_log.clone());

    let output = use_case
        .execute(ProcessInputInput {
            input: req.input,
            submission_type: req.submission_type,
        })
        .await?;

    Ok(Json(ProcessResponse {
        response: output.response,
        validation: output.validation,
    }))
}

/// POST /api/process-drawing
pub async fn process_drawing<E, C, L>(
    State(state): State<TutorAppState<E, C, L>>,
    Json(req): Json<ProcessDrawingRequest>,
) -> TutorResult<Json<Value>>
where
    E: SolverEngine + Send + Sync + 'static,
    C: Recognizer + Send + Sync + 'static,
    L: InputLog + Send + Sync + 'static,
{
    let use_case = RecognizeDrawingUseCase::new(state.recognizer.clone());

    let result = use_case
        .execute(RecognitionRequest {
            src: req.src,
            formats: req.formats,
            data_options: req.data_options.unwrap_or_else(|| Value::Object(Default::default())),
        })
        .await?;

    Ok(Json(result))
}
