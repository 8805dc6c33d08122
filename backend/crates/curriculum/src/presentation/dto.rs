//! API DTOs (Data Transfer Objects)

use serde::Deserialize;

/// GET /api/getmodule query string
#[derive(Debug, Clone, Deserialize)]
pub struct GetModuleQuery {
    pub module: Option<String>,
}

/// GET /api/get_tutor_response query string
#[derive(Debug, Clone, Deserialize)]
pub struct GetPartQuery {
    pub module: Option<String>,
    pub part: Option<String>,
}
