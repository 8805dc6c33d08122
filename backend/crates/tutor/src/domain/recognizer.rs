//! Recognizer Trait
//!
//! Boundary to the external handwriting-recognition API. The response body
//! is proxied back to the caller without interpretation.

use serde::Serialize;
use serde_json::Value;

use crate::error::TutorResult;

/// Forwarded recognition request
#[derive(Debug, Clone, Serialize)]
pub struct RecognitionRequest {
    pub src: Option<String>,
    pub formats: Vec<String>,
    pub data_options: Value,
}

/// Recognizer trait
#[trait_variant::make(Recognizer: Send)]
pub trait LocalRecognizer {
    /// Submit a drawing and return the raw recognition result
    async fn recognize(&self, request: &RecognitionRequest) -> TutorResult<Value>;
}
