//! HTTP surface tests
//!
//! Drives the full application (middleware included) against an in-memory
//! database using tower's oneshot.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use customer_server::core::{Config, ServerState};
use customer_server::db::DbService;
use customer_server::routes::build_app;

const ORIGIN: &str = "http://localhost:5173";

async fn test_app() -> Router {
    let mut config = Config::with_overrides(":memory:", 0);
    config.allowed_origins = vec![ORIGIN.into()];
    let db = DbService::in_memory().await.unwrap();
    build_app(ServerState::new(config, db))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, http::HeaderMap, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();
    (status, headers, body)
}

fn as_json(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn create_customer(app: &Router, body: Value) -> Value {
    let (status, _, bytes) = send(app, json_request("POST", "/api/customers", body)).await;
    assert_eq!(status, StatusCode::CREATED);
    as_json(&bytes)
}

#[tokio::test]
async fn create_then_get_roundtrip() {
    let app = test_app().await;

    let created = create_customer(
        &app,
        json!({
            "project_id": "proj_001",
            "name": "Asha Sharma",
            "email": "asha@example.com"
        }),
    )
    .await;

    assert_eq!(created["project_id"], "proj_001");
    assert_eq!(created["name"], "Asha Sharma");
    assert_eq!(created["email"], "asha@example.com");
    assert_eq!(created["address"], Value::Null);
    assert_eq!(created["is_deleted"], 0);
    assert_eq!(created["created_at"], created["updated_at"]);

    let id = created["id"].as_i64().unwrap();
    assert!(id > 0);

    let (status, _, bytes) = send(&app, get_request(&format!("/api/customers/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&bytes), created);
}

#[tokio::test]
async fn create_without_required_fields_is_400() {
    let app = test_app().await;

    let (status, _, bytes) =
        send(&app, json_request("POST", "/api/customers", json!({"name": "x"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(as_json(&bytes)["error"], "Project ID and name are required");

    let (status, _, _) =
        send(&app, json_request("POST", "/api/customers", json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn non_numeric_id_is_400() {
    let app = test_app().await;
    let (status, _, _) = send(&app, get_request("/api/customers/abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn nonpositive_id_is_400() {
    let app = test_app().await;
    let (status, _, bytes) = send(&app, get_request("/api/customers/0")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(as_json(&bytes)["error"], "Invalid customer ID provided");
}

#[tokio::test]
async fn unknown_id_is_404() {
    let app = test_app().await;
    let (status, _, bytes) = send(&app, get_request("/api/customers/12345")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(as_json(&bytes)["error"].as_str().unwrap().contains("12345"));
}

#[tokio::test]
async fn list_paginates_and_counts() {
    let app = test_app().await;
    for i in 0..3 {
        create_customer(&app, json!({"project_id": "proj_001", "name": format!("c{i}")})).await;
    }

    let (status, _, bytes) = send(&app, get_request("/api/customers?limit=2&offset=0")).await;
    assert_eq!(status, StatusCode::OK);
    let page = as_json(&bytes);
    assert_eq!(page["data"].as_array().unwrap().len(), 2);
    assert_eq!(page["count"], 3);

    let (_, _, bytes) = send(&app, get_request("/api/customers?limit=2&offset=2")).await;
    assert_eq!(as_json(&bytes)["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn list_search_filters_rows_and_count() {
    let app = test_app().await;
    create_customer(&app, json!({"project_id": "proj_001", "name": "Alice"})).await;
    create_customer(&app, json!({"project_id": "proj_002", "name": "Bob"})).await;
    create_customer(
        &app,
        json!({"project_id": "proj_003", "name": "Carol", "email": "carol@proj_001.example"}),
    )
    .await;

    let (status, _, bytes) = send(&app, get_request("/api/customers?search=proj_001")).await;
    assert_eq!(status, StatusCode::OK);
    let page = as_json(&bytes);
    assert_eq!(page["count"], 2);
    for row in page["data"].as_array().unwrap() {
        let haystack = format!(
            "{}{}{}",
            row["project_id"].as_str().unwrap(),
            row["name"].as_str().unwrap(),
            row["email"].as_str().unwrap_or("")
        );
        assert!(haystack.contains("proj_001"));
    }
}

#[tokio::test]
async fn oversized_limit_is_clamped_not_rejected() {
    let app = test_app().await;
    create_customer(&app, json!({"project_id": "p", "name": "a"})).await;

    let (status, _, _) = send(&app, get_request("/api/customers?limit=1000")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _, _) = send(&app, get_request("/api/customers?limit=0")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _, _) = send(&app, get_request("/api/customers?limit=-3")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn patch_updates_provided_fields_only() {
    let app = test_app().await;
    let created = create_customer(
        &app,
        json!({"project_id": "proj_001", "name": "Alice", "phone": "555-0100"}),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, _, bytes) = send(
        &app,
        json_request("PATCH", &format!("/api/customers/{id}"), json!({"name": "Alicia"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let updated = as_json(&bytes);
    assert_eq!(updated["name"], "Alicia");
    assert_eq!(updated["phone"], "555-0100");
    assert_eq!(updated["project_id"], "proj_001");
}

#[tokio::test]
async fn patch_with_empty_body_returns_current_record() {
    let app = test_app().await;
    let created = create_customer(&app, json!({"project_id": "p", "name": "Alice"})).await;
    let id = created["id"].as_i64().unwrap();

    let (status, _, bytes) = send(
        &app,
        json_request("PATCH", &format!("/api/customers/{id}"), json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&bytes), created);
}

#[tokio::test]
async fn patch_unknown_id_is_404() {
    let app = test_app().await;
    let (status, _, _) = send(
        &app,
        json_request("PATCH", "/api/customers/777", json!({"name": "Ghost"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_defaults_to_soft() {
    let app = test_app().await;
    let created = create_customer(&app, json!({"project_id": "p", "name": "Alice"})).await;
    let id = created["id"].as_i64().unwrap();

    let (status, _, bytes) = send(
        &app,
        Request::builder()
            .method("DELETE")
            .uri(format!("/api/customers/{id}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(as_json(&bytes)["message"]
        .as_str()
        .unwrap()
        .contains("soft-deleted"));

    // Invisible to reads now
    let (status, _, _) = send(&app, get_request(&format!("/api/customers/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // The row still exists: hard delete removes it
    let (status, _, bytes) = send(
        &app,
        Request::builder()
            .method("DELETE")
            .uri(format!("/api/customers/{id}?action=hard"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(as_json(&bytes)["message"]
        .as_str()
        .unwrap()
        .contains("hard-deleted"));

    // Gone for good
    let (status, _, _) = send(
        &app,
        Request::builder()
            .method("DELETE")
            .uri(format!("/api/customers/{id}?action=hard"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unmatched_route_is_json_404() {
    let app = test_app().await;
    let (status, _, bytes) = send(&app, get_request("/api/unknown")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(as_json(&bytes)["error"], "Not Found");
}

#[tokio::test]
async fn unsupported_method_is_404_not_405() {
    let app = test_app().await;
    let (status, _, bytes) = send(
        &app,
        json_request("PUT", "/api/customers/1", json!({"name": "x"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(as_json(&bytes)["error"], "Not Found");
}

#[tokio::test]
async fn preflight_is_204_with_cors_headers() {
    let app = test_app().await;
    let (status, headers, body) = send(
        &app,
        Request::builder()
            .method("OPTIONS")
            .uri("/api/customers")
            .header(header::ORIGIN, ORIGIN)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PATCH")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], ORIGIN);
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_METHODS],
        "GET,POST,PATCH,DELETE,OPTIONS"
    );
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_HEADERS],
        "Content-Type,Authorization"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_MAX_AGE], "86400");
}

#[tokio::test]
async fn preflight_never_surfaces_routing_errors() {
    let app = test_app().await;
    // A path that would 404 for any real method still preflights as 204
    let (status, _, _) = send(
        &app,
        Request::builder()
            .method("OPTIONS")
            .uri("/api/not-a-route")
            .header(header::ORIGIN, ORIGIN)
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn allowed_origin_is_echoed_on_normal_responses() {
    let app = test_app().await;
    let (status, headers, _) = send(
        &app,
        Request::builder()
            .uri("/health")
            .header(header::ORIGIN, ORIGIN)
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], ORIGIN);
    assert_eq!(headers[header::VARY], "Origin");
}

#[tokio::test]
async fn disallowed_origin_gets_no_cors_headers() {
    let app = test_app().await;
    let (status, headers, _) = send(
        &app,
        Request::builder()
            .uri("/health")
            .header(header::ORIGIN, "https://evil.example")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(!headers.contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}

#[tokio::test]
async fn openapi_document_is_served_as_yaml() {
    let app = test_app().await;
    let (status, headers, body) = send(&app, get_request("/openapi.yaml")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "text/yaml");
    assert!(String::from_utf8(body).unwrap().starts_with("openapi:"));
}

#[tokio::test]
async fn health_reports_database_status() {
    let app = test_app().await;
    let (status, _, bytes) = send(&app, get_request("/health")).await;
    assert_eq!(status, StatusCode::OK);
    let health = as_json(&bytes);
    assert_eq!(health["status"], "ok");
    assert_eq!(health["database"], "ok");
}
