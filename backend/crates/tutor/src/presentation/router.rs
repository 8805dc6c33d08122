//! Tutor Router

use axum::{Router, routing::post};
use sqlx::PgPool;
use std::sync::Arc;

use crate::application::config::TutorConfig;
use crate::domain::engine::SolverEngine;
use crate::domain::input_log::InputLog;
use crate::domain::recognizer::Recognizer;
use crate::infra::http::{HttpRecognizer, HttpSolverEngine};
use crate::infra::postgres::PgInputLog;
use crate::presentation::handlers::{self, TutorAppState};

/// Create the tutor router with HTTP clients and the Postgres log
pub fn tutor_router(pool: PgPool, config: TutorConfig) -> Router {
    let client = reqwest::Client::new();

    tutor_router_generic(
        HttpSolverEngine::new(client.clone(), &config),
        HttpRecognizer::new(client, &config),
        PgInputLog::new(pool),
    )
}

/// Create a generic tutor router for any engine/recognizer/log
pub fn tutor_router_generic<E, C, L>(engine: E, recognizer: C, input_log: L) -> Router
where
    E: SolverEngine + Send + Sync + 'static,
    C: Recognizer + Send + Sync + 'static,
    L: InputLog + Send + Sync + 'static,
{
    let state = TutorAppState {
        engine: Arc::new(engine),
        recognizer: Arc::new(recognizer),
        input_log: Arc::new(input_log),
    };

    Router::new()
        .route("/process", post(handlers::process::<E, C, L>))
        .route("/process-drawing", post(handlers::process_drawing::<E, C, L>))
        .with_state(state)
}
