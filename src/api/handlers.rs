// src/api/handlers.rs

use axum::{
    extract::{Extension, OriginalUri, Path, Query},
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info};

use super::models::*;
use crate::common::{safe_email_log, ApiError, AppState, ValidationResult, Validator};
use crate::strict::{
    parse_integer_param, validate_integer_id, validate_pagination_params, LoginRequest,
    PostRequest, RegistrationRequest, ValidatedLogin, ValidatedPost, ValidatedRegistration,
    DEFAULT_PAGE_LIMIT,
};
use crate::validation::{
    has_sql_injection_content, has_xss_content, FieldKind, PostCreation, PostValidator,
    RegistrationValidator, Sanitizer, UserRegistration,
};

// ============================================================================
// Health
// ============================================================================

pub async fn health_handler(Extension(state): Extension<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: state.config.project_name.clone(),
        environment: state.config.environment.clone(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

pub async fn not_found_handler(OriginalUri(uri): OriginalUri) -> ApiError {
    debug!(path = %uri.path(), "No route matched");
    ApiError::NotFound(format!("No route for {}", uri.path()))
}

// ============================================================================
// Form Validation Engine
// ============================================================================

pub async fn validate_field_handler(
    Json(payload): Json<FieldValidationRequest>,
) -> Result<Json<ValidationResult>, ApiError> {
    let kind: FieldKind = payload.field.parse().map_err(ApiError::BadRequest)?;

    let result = kind.validate(payload.value.as_str(), payload.label.as_deref());
    debug!(field = %kind, valid = result.is_valid, "Validated field");

    Ok(Json(result))
}

pub async fn validate_registration_handler(
    Json(payload): Json<UserRegistration>,
) -> Json<ValidationResult> {
    let result = RegistrationValidator.validate(&payload);
    info!(
        email = %safe_email_log(&payload.email),
        valid = result.is_valid,
        errors = result.errors.len(),
        "Validated registration form"
    );
    Json(result)
}

pub async fn validate_post_handler(Json(payload): Json<PostCreation>) -> Json<ValidationResult> {
    let result = PostValidator.validate(&payload);
    debug!(valid = result.is_valid, errors = result.errors.len(), "Validated post form");
    Json(result)
}

pub async fn sanitize_handler(
    Extension(state): Extension<Arc<AppState>>,
    Json(payload): Json<TextRequest>,
) -> Json<SanitizeResponse> {
    let original = payload.value.as_str();
    let sanitized = original
        .map(|text| state.sanitizer.sanitize(text))
        .unwrap_or_default();
    let changed = original.map(|text| text != sanitized).unwrap_or(false);

    Json(SanitizeResponse { sanitized, changed })
}

pub async fn detect_handler(Json(payload): Json<TextRequest>) -> Json<DetectionResponse> {
    let text = payload.value.as_str();
    Json(DetectionResponse {
        has_xss: has_xss_content(text),
        has_sql_injection: has_sql_injection_content(text),
    })
}

// ============================================================================
// Strict Input Layer
// ============================================================================

pub async fn strict_registration_handler(
    Json(payload): Json<RegistrationRequest>,
) -> Result<Json<ValidatedRegistration>, ApiError> {
    let validated = payload.validate()?;
    info!(email = %safe_email_log(&validated.email), "Registration input accepted");
    Ok(Json(validated))
}

pub async fn strict_post_handler(
    Json(payload): Json<PostRequest>,
) -> Result<Json<ValidatedPost>, ApiError> {
    Ok(Json(payload.validate()?))
}

pub async fn strict_login_handler(
    Json(payload): Json<LoginRequest>,
) -> Result<Json<ValidatedLogin>, ApiError> {
    Ok(Json(payload.validate()?))
}

pub async fn strict_pagination_handler(
    Query(query): Query<PaginationQuery>,
) -> Result<Json<PaginationResponse>, ApiError> {
    let limit = match query.limit.as_deref() {
        Some(raw) => parse_integer_param(raw, "Limit")?,
        None => DEFAULT_PAGE_LIMIT,
    };
    let offset = match query.offset.as_deref() {
        Some(raw) => parse_integer_param(raw, "Offset")?,
        None => 0,
    };

    let (limit, offset) = validate_pagination_params(limit, offset)?;
    Ok(Json(PaginationResponse { limit, offset }))
}

pub async fn strict_id_handler(Path(raw): Path<String>) -> Result<Json<IdResponse>, ApiError> {
    let id = validate_integer_id(&raw, "ID")?;
    Ok(Json(IdResponse { id }))
}
