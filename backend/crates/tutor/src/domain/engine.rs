//! Solver Engine Trait
//!
//! Boundary to the external solving/validation engine. The engine is
//! opaque: solve produces a solution for the raw input, validate judges
//! the input against that solution.

use crate::error::TutorResult;

/// Solver engine trait
#[trait_variant::make(SolverEngine: Send)]
pub trait LocalSolverEngine {
    /// Produce a solution for the submitted input
    async fn solve(&self, input: &str) -> TutorResult<String>;

    /// Validate the input against a solution
    async fn validate(&self, input: &str, solution: &str) -> TutorResult<String>;
}
