// src/api/routes.rs

use axum::{
    extract::Extension,
    http::{header, HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers;
use crate::common::AppState;
use crate::logging_middleware::{log_request_response, REQUEST_ID_HEADER};

pub fn validation_routes() -> Router {
    Router::new()
        .route("/validate/field", post(handlers::validate_field_handler))
        .route(
            "/validate/registration",
            post(handlers::validate_registration_handler),
        )
        .route("/validate/post", post(handlers::validate_post_handler))
        .route("/sanitize", post(handlers::sanitize_handler))
        .route("/detect", post(handlers::detect_handler))
}

pub fn strict_routes() -> Router {
    Router::new()
        .route(
            "/strict/registration",
            post(handlers::strict_registration_handler),
        )
        .route("/strict/post", post(handlers::strict_post_handler))
        .route("/strict/login", post(handlers::strict_login_handler))
        .route(
            "/strict/pagination",
            get(handlers::strict_pagination_handler),
        )
        .route("/strict/id/:raw", get(handlers::strict_id_handler))
}

/// Full application: health check, API routes under the configured prefix,
/// and the middleware stack.
pub fn build_app(state: AppState) -> Router {
    let api = Router::new()
        // ====================================================================
        // FORM VALIDATION ENGINE
        // ====================================================================
        .merge(validation_routes())
        // ====================================================================
        // STRICT INPUT LAYER
        // ====================================================================
        .merge(strict_routes());

    let mut app = Router::new().route("/health", get(handlers::health_handler));

    app = if state.config.api_prefix.is_empty() {
        app.merge(api)
    } else {
        app.nest(&state.config.api_prefix, api)
    };
    app = app.fallback(handlers::not_found_handler);

    if state.config.log_bodies {
        app = app.layer(middleware::from_fn(log_request_response));
    }

    let cors = cors_layer(&state.config.cors_origins);

    app.layer(Extension(Arc::new(state)))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(cors_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, REQUEST_ID_HEADER])
        .allow_credentials(true)
}
