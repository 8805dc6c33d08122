//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

/// POST /api/update-progress request
///
/// Fields are optional so that presence is checked by the use case rather
/// than by deserialization; a report with any field absent is rejected
/// before the store is touched.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProgressRequest {
    pub user_id: Option<String>,
    pub module_id: Option<String>,
    pub progress: Option<f64>,
}

/// Plain confirmation body
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_accepts_absent_progress() {
        let req: UpdateProgressRequest =
            serde_json::from_str(r#"{"user_id":"u1","module_id":"m1"}"#).unwrap();
        assert!(req.progress.is_none());
    }

    #[test]
    fn test_request_accepts_null_progress() {
        let req: UpdateProgressRequest =
            serde_json::from_str(r#"{"user_id":"u1","module_id":"m1","progress":null}"#).unwrap();
        assert!(req.progress.is_none());
    }

    #[test]
    fn test_request_full() {
        let req: UpdateProgressRequest =
            serde_json::from_str(r#"{"user_id":"u1","module_id":"m1","progress":0.5}"#).unwrap();
        assert_eq!(req.progress, Some(0.5));
    }
}
