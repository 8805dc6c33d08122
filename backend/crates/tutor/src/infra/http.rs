//! HTTP Clients
//!
//! reqwest-backed implementations of the engine and recognizer boundaries.
//! No retries: a failed call fails the request.

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::application::config::TutorConfig;
use crate::domain::engine::SolverEngine;
use crate::domain::recognizer::{RecognitionRequest, Recognizer};
use crate::error::{TutorError, TutorResult};

// ============================================================================
// Solver Engine
// ============================================================================

/// HTTP client for the solving/validation engine
#[derive(Debug, Clone)]
pub struct HttpSolverEngine {
    client: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct SolveResponse {
    solution: String,
}

#[derive(Deserialize)]
struct ValidateResponse {
    result: String,
}

impl HttpSolverEngine {
    pub fn new(client: Client, config: &TutorConfig) -> Self {
        Self {
            client,
            base_url: config.solver_url.trim_end_matches('/').to_string(),
        }
    }

    async fn post_json<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        body: Value,
    ) -> TutorResult<T> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .json(&body)
            .send()
            .await
            .map_err(|e| TutorError::Solver(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TutorError::Solver(format!(
                "engine returned status {status}"
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| TutorError::Solver(e.to_string()))
    }
}

impl SolverEngine for HttpSolverEngine {
    async fn solve(&self, input: &str) -> TutorResult<String> {
        let body = serde_json::json!({ "input": input });
        let response: SolveResponse = self.post_json("/solve", body).await?;
        Ok(response.solution)
    }

    async fn validate(&self, input: &str, solution: &str) -> TutorResult<String> {
        let body = serde_json::json!({ "input": input, "solution": solution });
        let response: ValidateResponse = self.post_json("/validate", body).await?;
        Ok(response.result)
    }
}

// ============================================================================
// Recognizer
// ============================================================================

/// HTTP client for the handwriting-recognition API
#[derive(Debug, Clone)]
pub struct HttpRecognizer {
    client: Client,
    url: String,
    app_id: String,
    app_key: String,
}

impl HttpRecognizer {
    pub fn new(client: Client, config: &TutorConfig) -> Self {
        Self {
            client,
            url: config.recognizer_url.clone(),
            app_id: config.recognizer_app_id.clone(),
            app_key: config.recognizer_app_key.clone(),
        }
    }
}

impl Recognizer for HttpRecognizer {
    async fn recognize(&self, request: &RecognitionRequest) -> TutorResult<Value> {
        let response = self
            .client
            .post(&self.url)
            .header("app_id", &self.app_id)
            .header("app_key", &self.app_key)
            .json(request)
            .send()
            .await
            .map_err(|e| TutorError::Transport(e.to_string()))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(TutorError::Upstream {
                status: status.as_u16(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| TutorError::Transport(e.to_string()))
    }
}
