//! Recognize Drawing Use Case
//!
//! Pure pass-through to the recognition API.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::recognizer::{RecognitionRequest, Recognizer};
use crate::error::TutorResult;

/// Recognize drawing use case
pub struct RecognizeDrawingUseCase<C>
where
    C: Recognizer,
{
    recognizer: Arc<C>,
}

impl<C> RecognizeDrawingUseCase<C>
where
    C: Recognizer,
{
    pub fn new(recognizer: Arc<C>) -> Self {
        Self { recognizer }
    }

    pub async fn execute(&self, request: RecognitionRequest) -> TutorResult<Value> {
        self.recognizer.recognize(&request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TutorError;
    use crate::infra::memory::StubRecognizer;

    fn request() -> RecognitionRequest {
        RecognitionRequest {
            src: Some("data:image/png;base64,AAAA".to_string()),
            formats: vec!["latex_styled".to_string()],
            data_options: serde_json::json!({}),
        }
    }

    #[tokio::test]
    async fn test_result_is_proxied_unchanged() {
        let canned = serde_json::json!({"latex_styled": "x^2", "confidence": 0.98});
        let use_case = RecognizeDrawingUseCase::new(Arc::new(StubRecognizer::new(canned.clone())));

        let result = use_case.execute(request()).await.unwrap();
        assert_eq!(result, canned);
    }

    #[tokio::test]
    async fn test_upstream_status_is_surfaced() {
        let use_case = RecognizeDrawingUseCase::new(Arc::new(StubRecognizer::failing(429)));

        let result = use_case.execute(request()).await;
        assert!(matches!(result, Err(TutorError::Upstream { status: 429 })));
    }
}
