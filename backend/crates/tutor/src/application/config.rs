//! Application Configuration

/// Tutor configuration
///
/// Recognition credentials come from the environment; they are never
/// hard-coded.
#[derive(Debug, Clone)]
pub struct TutorConfig {
    /// Base URL of the solving/validation engine
    pub solver_url: String,
    /// Recognition API endpoint
    pub recognizer_url: String,
    /// Recognition API application id header
    pub recognizer_app_id: String,
    /// Recognition API application key header
    pub recognizer_app_key: String,
}

impl Default for TutorConfig {
    fn default() -> Self {
        Self {
            solver_url: "http://localhost:8600".to_string(),
            recognizer_url: "https://api.mathpix.com/v3/text".to_string(),
            recognizer_app_id: String::new(),
            recognizer_app_key: String::new(),
        }
    }
}
