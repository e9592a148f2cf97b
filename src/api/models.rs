// src/api/models.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Request Models
// ============================================================================

/// Single-field check. `value` may be any JSON; non-strings count as missing.
#[derive(Debug, Deserialize)]
pub struct FieldValidationRequest {
    pub field: String,
    #[serde(default)]
    pub value: Value,
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TextRequest {
    #[serde(default)]
    pub value: Value,
}

/// Raw query values; parsed by the handler so bad input gets a JSON error
#[derive(Debug, Deserialize)]
pub struct PaginationQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

// ============================================================================
// Response Models
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub environment: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SanitizeResponse {
    pub sanitized: String,
    pub changed: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResponse {
    pub has_xss: bool,
    pub has_sql_injection: bool,
}

#[derive(Debug, Serialize)]
pub struct PaginationResponse {
    pub limit: i64,
    pub offset: i64,
}

#[derive(Debug, Serialize)]
pub struct IdResponse {
    pub id: i64,
}
