//! Tutor Backend Module
//!
//! Pass-throughs to the external math engines. Solving and validation are
//! delegated to the configured solver service; handwritten input goes to
//! the recognition API unchanged. The only state this crate touches is the
//! best-effort submission log, whose failures never fail a request.
//!
//! Clean Architecture structure:
//! - `domain/` - Engine, recognizer, and input-log traits
//! - `application/` - Use cases and configuration
//! - `infra/` - HTTP clients and the Postgres log (plus test doubles)
//! - `presentation/` - HTTP handlers, DTOs, router

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::TutorConfig;
pub use error::{TutorError, TutorResult};
pub use presentation::router::tutor_router;

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}
