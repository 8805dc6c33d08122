//! Curriculum Backend Module
//!
//! Read-only access to the versioned curriculum documents. A document is a
//! JSON file per module holding an ordered tree of parts and questions;
//! documents are immutable per deployment, so no caching or locking is
//! involved.
//!
//! Clean Architecture structure:
//! - `domain/` - Typed document tree and the source trait
//! - `application/` - Slice-extraction use cases
//! - `infra/` - Filesystem store (plus an in-memory test double)
//! - `presentation/` - HTTP handlers, DTOs, router

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::CurriculumConfig;
pub use error::{CurriculumError, CurriculumResult};
pub use infra::fs::FsModuleStore;
pub use presentation::router::curriculum_router;

pub mod models {
    pub use crate::domain::document::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}
