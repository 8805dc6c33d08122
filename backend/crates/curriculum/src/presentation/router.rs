//! Curriculum Router

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::domain::source::ModuleSource;
use crate::infra::fs::FsModuleStore;
use crate::presentation::handlers::{self, CurriculumAppState};

/// Create the curriculum router with the filesystem store
pub fn curriculum_router(store: FsModuleStore) -> Router {
    curriculum_router_generic(store)
}

/// Create a generic curriculum router for any module source
pub fn curriculum_router_generic<S>(source: S) -> Router
where
    S: ModuleSource + Clone + Send + Sync + 'static,
{
    let state = CurriculumAppState {
        source: Arc::new(source),
    };

    Router::new()
        .route("/getmodule", get(handlers::get_module::<S>))
        .route(
            "/get_tutor_response",
            get(handlers::get_tutor_response::<S>),
        )
        .with_state(state)
}
