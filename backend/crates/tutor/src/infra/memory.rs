//! In-Memory Test Doubles

use std::sync::Mutex;

use serde_json::Value;

use crate::domain::engine::SolverEngine;
use crate::domain::input_log::{InputLog, InputRecord};
use crate::domain::recognizer::{RecognitionRequest, Recognizer};
use crate::error::{TutorError, TutorResult};

/// Input log that collects entries in memory
#[derive(Default)]
pub struct RecordingInputLog {
    entries: Mutex<Vec<InputRecord>>,
}

impl RecordingInputLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<InputRecord> {
        self.entries
            .lock()
            .map(|g| (*g).clone())
            .unwrap_or_default()
    }
}

impl InputLog for RecordingInputLog {
    async fn record(&self, entry: &InputRecord) -> TutorResult<()> {
        self.entries
            .lock()
            .map_err(|_| TutorError::Transport("log lock poisoned".to_string()))?
            .push(entry.clone());
        Ok(())
    }
}

/// Input log whose writes always fail
pub struct FailingInputLog;

impl InputLog for FailingInputLog {
    async fn record(&self, _entry: &InputRecord) -> TutorResult<()> {
        Err(TutorError::Transport("log unavailable".to_string()))
    }
}

/// Solver engine with canned answers
pub struct StubSolverEngine {
    solution: Option<String>,
    validation: Option<String>,
}

impl StubSolverEngine {
    pub fn new(solution: impl Into<String>, validation: impl Into<String>) -> Self {
        Self {
            solution: Some(solution.into()),
            validation: Some(validation.into()),
        }
    }

    pub fn failing() -> Self {
        Self {
            solution: None,
            validation: None,
        }
    }
}

impl SolverEngine for StubSolverEngine {
    async fn solve(&self, _input: &str) -> TutorResult<String> {
        self.solution
            .clone()
            .ok_or_else(|| TutorError::Solver("engine unavailable".to_string()))
    }

    async fn validate(&self, _input: &str, _solution: &str) -> TutorResult<String> {
        self.validation
            .clone()
            .ok_or_else(|| TutorError::Solver("engine unavailable".to_string()))
    }
}

/// Recognizer with a canned response or a canned failure status
pub struct StubRecognizer {
    result: Result<Value, u16>,
}

impl StubRecognizer {
    pub fn new(result: Value) -> Self {
        Self { result: Ok(result) }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            result: Err(status),
        }
    }
}

impl Recognizer for StubRecognizer {
    async fn recognize(&self, _request: &RecognitionRequest) -> TutorResult<Value> {
        match &self.result {
            Ok(value) => Ok(value.clone()),
            Err(status) => Err(TutorError::Upstream { status: *status }),
        }
    }
}
