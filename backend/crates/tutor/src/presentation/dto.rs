//! API DTOs (Data Transfer Objects)
//!
//! Field names follow the frontend's wire format: `/api/process` sends
//! `submissionType` in camelCase, the drawing endpoint sends snake_case.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// POST /api/process request
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessRequest {
    /// Raw submitted input; absent means empty
    #[serde(default)]
    pub input: String,

    #[serde(default, rename = "submissionType")]
    pub submission_type: String,
}

/// POST /api/process response
#[derive(Debug, Clone, Serialize)]
pub struct ProcessResponse {
    pub response: String,
    pub validation: String,
}

/// POST /api/process-drawing request
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessDrawingRequest {
    pub src: Option<String>,

    #[serde(default)]
    pub formats: Vec<String>,

    pub data_options: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_request_field_names() {
        let req: ProcessRequest =
            serde_json::from_str(r#"{"input": "2+2", "submissionType": "drawing"}"#).unwrap();
        assert_eq!(req.input, "2+2");
        assert_eq!(req.submission_type, "drawing");
    }

    #[test]
    fn test_process_request_defaults() {
        let req: ProcessRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.input, "");
        assert_eq!(req.submission_type, "");
    }

    #[test]
    fn test_drawing_request_defaults() {
        let req: ProcessDrawingRequest = serde_json::from_str(r#"{"src": "data:"}"#).unwrap();
        assert_eq!(req.src.as_deref(), Some("data:"));
        assert!(req.formats.is_empty());
        assert!(req.data_options.is_none());
    }
}
