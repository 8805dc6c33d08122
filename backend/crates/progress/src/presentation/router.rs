//! Progress Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::domain::repository::ProgressRepository;
use crate::infra::postgres::PgProgressRepository;
use crate::presentation::handlers::{self, ProgressAppState};

/// Create the progress router with PostgreSQL repository
pub fn progress_router(repo: PgProgressRepository) -> Router {
    progress_router_generic(repo)
}

/// Create a generic progress router for any repository implementation
pub fn progress_router_generic<R>(repo: R) -> Router
where
    R: ProgressRepository + Clone + Send + Sync + 'static,
{
    let state = ProgressAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/update-progress", post(handlers::update_progress::<R>))
        .with_state(state)
}
