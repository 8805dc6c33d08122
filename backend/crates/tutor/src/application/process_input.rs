//! Process Input Use Case
//!
//! Logs the submission for record-keeping, then delegates solving and
//! validation to the engine. The log write is best-effort: a failed
//! insert is warned about and the request continues.

use std::sync::Arc;

use crate::domain::engine::SolverEngine;
use crate::domain::input_log::{InputLog, InputRecord};
use crate::error::TutorResult;

/// Process input
pub struct ProcessInputInput {
    pub input: String,
    pub submission_type: String,
}

/// Process output
pub struct ProcessInputOutput {
    pub response: String,
    pub validation: String,
}

/// Process input use case
pub struct ProcessInputUseCase<E, L>
where
    E: SolverEngine,
    L: InputLog,
{
    engine: Arc<E>,
    input_log: Arc<L>,
}

impl<E, L> ProcessInputUseCase<E, L>
where
    E: SolverEngine,
    L: InputLog,
{
    pub fn new(engine: Arc<E>, input_log: Arc<L>) -> Self {
        Self { engine, input_log }
    }

    pub async fn execute(&self, input: ProcessInputInput) -> TutorResult<ProcessInputOutput> {
        let entry = InputRecord {
            text: input.input.clone(),
            submission_type: input.submission_type,
        };

        if let Err(e) = self.input_log.record(&entry).await {
            tracing::warn!(error = %e, "Failed to log submission, continuing");
        }

        let solution = self.engine.solve(&input.input).await?;
        let validation = self.engine.validate(&input.input, &solution).await?;

        Ok(ProcessInputOutput {
            response: solution,
            validation,
        })
    }
}
