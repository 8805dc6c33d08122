//! Shared Kernel - Domain-crossing minimal core
//!
//! The smallest shared vocabulary of the tutoring backend:
//! - Unified error type and result alias
//! - HTTP-status-mapped error classification
//! - Typed ID wrappers for domain entities
//!
//! **Design Principle**: only things that are hard to change and mean the
//! same thing in every domain crate belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
