//! Tests for the HTTP surface
//!
//! These tests drive the full router (middleware included) with
//! `tower::ServiceExt::oneshot` and check status codes and JSON bodies.

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::api::build_app;
    use crate::common::{AppState, ServiceConfig};
    use crate::validation::Sanitizer;

    fn app() -> Router {
        build_app(AppState::new(ServiceConfig::default()))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.expect("request failed");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    // ==================== Health ====================

    #[tokio::test]
    async fn test_health_endpoint() {
        let (status, body) = send(app(), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["environment"], "development");
    }

    // ==================== Form validation engine ====================

    #[tokio::test]
    async fn test_validate_field_email() {
        let (status, body) = send(
            app(),
            post_json("/api/v1/validate/field", json!({ "field": "email", "value": "abc" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["isValid"], false);
        assert_eq!(body["errors"], json!(["Please enter a valid email address"]));
    }

    #[tokio::test]
    async fn test_validate_field_non_text_value() {
        let (status, body) = send(
            app(),
            post_json("/api/v1/validate/field", json!({ "field": "username", "value": 42 })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["errors"], json!(["Username is required"]));
    }

    #[tokio::test]
    async fn test_validate_field_label() {
        let (_, body) = send(
            app(),
            post_json(
                "/api/v1/validate/field",
                json!({ "field": "name", "value": "", "label": "Nickname" }),
            ),
        )
        .await;

        assert_eq!(body["errors"], json!(["Nickname is required"]));
    }

    #[tokio::test]
    async fn test_validate_field_unknown() {
        let (status, body) = send(
            app(),
            post_json("/api/v1/validate/field", json!({ "field": "zipcode", "value": "x" })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_validate_registration_mismatch() {
        let (status, body) = send(
            app(),
            post_json(
                "/api/v1/validate/registration",
                json!({
                    "username": "valid_user1",
                    "email": "user@example.com",
                    "firstName": "Ada",
                    "lastName": "Lovelace",
                    "password": "abcdefg1",
                    "confirmPassword": "abcdefg2"
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["isValid"], false);
        assert_eq!(body["errors"], json!(["Passwords do not match"]));
    }

    #[tokio::test]
    async fn test_validate_registration_rejects_wrong_shape() {
        let response = app()
            .oneshot(post_json(
                "/api/v1/validate/registration",
                json!({ "username": 5 }),
            ))
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_validate_post() {
        let (_, body) = send(
            app(),
            post_json(
                "/api/v1/validate/post",
                json!({
                    "title": "SELECT * FROM users WHERE 1=1",
                    "content": "A perfectly ordinary paragraph."
                }),
            ),
        )
        .await;

        assert_eq!(body["errors"], json!(["Title contains invalid content"]));
    }

    #[tokio::test]
    async fn test_sanitize_endpoint() {
        let (status, body) = send(
            app(),
            post_json(
                "/api/v1/sanitize",
                json!({ "value": "Hi <script>alert(1)</script>" }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["sanitized"], "Hi");
        assert_eq!(body["changed"], true);

        let (_, body) = send(app(), post_json("/api/v1/sanitize", json!({ "value": null }))).await;
        assert_eq!(body["sanitized"], "");
        assert_eq!(body["changed"], false);
    }

    struct UppercaseSanitizer;

    impl Sanitizer for UppercaseSanitizer {
        fn sanitize(&self, input: &str) -> String {
            input.to_uppercase()
        }
    }

    #[tokio::test]
    async fn test_sanitize_endpoint_uses_configured_sanitizer() {
        let state =
            AppState::new(ServiceConfig::default()).with_sanitizer(Arc::new(UppercaseSanitizer));
        let (status, body) = send(
            build_app(state),
            post_json("/api/v1/sanitize", json!({ "value": "quiet" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["sanitized"], "QUIET");
        assert_eq!(body["changed"], true);
    }

    #[tokio::test]
    async fn test_detect_endpoint() {
        let (_, body) = send(
            app(),
            post_json("/api/v1/detect", json!({ "value": "<script>alert(1)</script>" })),
        )
        .await;
        assert_eq!(body["hasXss"], true);
        assert_eq!(body["hasSqlInjection"], false);

        let (_, body) = send(app(), post_json("/api/v1/detect", json!({ "value": 7 }))).await;
        assert_eq!(body["hasXss"], false);
        assert_eq!(body["hasSqlInjection"], false);
    }

    // ==================== Strict input layer ====================

    #[tokio::test]
    async fn test_strict_registration() {
        let (status, body) = send(
            app(),
            post_json(
                "/api/v1/strict/registration",
                json!({
                    "username": "Ada_L",
                    "email": "ADA@Example.com",
                    "password": "abcdefg1",
                    "first_name": "ada",
                    "last_name": "lovelace"
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["username"], "ada_l");
        assert_eq!(body["email"], "ada@example.com");
        assert_eq!(body["first_name"], "Ada");
        assert!(body.get("password").is_none());
    }

    #[tokio::test]
    async fn test_strict_post_rejects_sql() {
        let (status, body) = send(
            app(),
            post_json(
                "/api/v1/strict/post",
                json!({ "title": "Hello there", "content": "x' OR 'a'='a and more" }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Potentially malicious SQL content detected");
    }

    #[tokio::test]
    async fn test_strict_login() {
        let (status, body) = send(
            app(),
            post_json(
                "/api/v1/strict/login",
                json!({ "username": "alice", "password": "secret123" }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "username": "alice" }));
    }

    #[tokio::test]
    async fn test_strict_pagination() {
        let (status, body) = send(app(), get("/api/v1/strict/pagination")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "limit": 20, "offset": 0 }));

        let (status, body) = send(app(), get("/api/v1/strict/pagination?limit=101")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Limit cannot exceed 100");

        let (status, body) =
            send(app(), get("/api/v1/strict/pagination?limit=10&offset=-3")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "limit": 10, "offset": 0 }));
    }

    #[tokio::test]
    async fn test_strict_pagination_malformed_values_are_json_errors() {
        let (status, body) = send(app(), get("/api/v1/strict/pagination?limit=abc")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "error": "Limit must be a valid integer", "code": "BAD_REQUEST" })
        );

        let (status, body) = send(
            app(),
            get("/api/v1/strict/pagination?limit=5&offset=99999999999999999999"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Offset value is too large");
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_not_found() {
        let (status, body) = send(app(), get("/api/v1/nowhere")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
        assert_eq!(body["error"], "No route for /api/v1/nowhere");
    }

    #[tokio::test]
    async fn test_strict_id() {
        let (status, body) = send(app(), get("/api/v1/strict/id/15")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], 15);

        let (status, body) = send(app(), get("/api/v1/strict/id/abc")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "ID must be a valid integer");
    }

    // ==================== Configuration ====================

    #[tokio::test]
    async fn test_custom_prefix_and_body_logging() {
        let config = ServiceConfig::from_lookup(|key| match key {
            "API_V1_STR" => Some("/api/v2".to_string()),
            "LOG_BODIES" => Some("true".to_string()),
            _ => None,
        });
        let app = build_app(AppState::new(config));

        let mut request = post_json("/api/v2/detect", json!({ "value": "hello" }));
        request
            .headers_mut()
            .insert("x-request-id", "req-123".parse().unwrap());

        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("x-request-id").unwrap(),
            "req-123"
        );

        let response = app.oneshot(get("/api/v1/strict/id/1")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
