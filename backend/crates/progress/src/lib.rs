//! Progress Ledger Backend Module
//!
//! Owns the per-(user, module) progress record. Reconciliation is
//! last-write-wins: each report overwrites the stored fraction and
//! recomputes the derived completion flag. The write is a single atomic
//! upsert, so exactly one record ever exists per pair and the flag is
//! never observably stale relative to the stored fraction.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities and repository trait
//! - `application/` - Report-progress use case
//! - `infra/` - Database implementation (plus an in-memory test double)
//! - `presentation/` - HTTP handlers, DTOs, router

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{ProgressError, ProgressResult};
pub use infra::postgres::PgProgressRepository;
pub use presentation::router::progress_router;

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgProgressRepository as ProgressStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

#[cfg(test)]
mod tests;
