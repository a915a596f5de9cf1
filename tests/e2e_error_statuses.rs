// tests/e2e_error_statuses.rs
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use serde_json::{Value, json};
use tower::util::ServiceExt as _;

mod support;

use support::{get, login_admin, send};

async fn raw_post(
    app: &axum::Router,
    uri: &str,
    content_type: Option<&str>,
    payload: impl Into<Body>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method("POST").uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    let resp = app
        .clone()
        .oneshot(builder.body(payload.into()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[tokio::test]
async fn health_reports_storage_mode() {
    let app = support::make_test_router();
    for uri in ["/", "/health"] {
        let (status, body) = get(&app, uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["mode"], "memory");
        assert_eq!(body["message"], "Bangla News API is running");
    }
}

#[tokio::test]
async fn malformed_json_is_400_with_envelope() {
    let app = support::make_test_router();
    let (status, body) = raw_post(
        &app,
        "/api/subscribers",
        Some("application/json"),
        "{\"email\": ",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Bad Request");
    assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
    assert!(body.get("errors").is_none());
}

#[tokio::test]
async fn wrong_content_type_is_415() {
    let app = support::make_test_router();
    let (status, body) = raw_post(
        &app,
        "/api/subscribers",
        Some("text/plain"),
        "email=fan@khabor.test",
    )
    .await;
    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(body["error"], "Unsupported Media Type");
}

#[tokio::test]
async fn oversized_bodies_are_413() {
    let app = support::make_test_router();
    let (admin, _) = login_admin(&app).await;
    let huge = json!({
        "title": "বড়",
        "category": "national",
        "author": "প্রতিবেদক",
        "excerpt": "সারাংশ",
        "body": "ক".repeat(2 * 1024 * 1024),
    });

    let (status, _) = support::post(&app, "/api/articles", Some(&admin), huge).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn validation_failures_list_every_field() {
    let app = support::make_test_router();
    let (status, body) = support::post(
        &app,
        "/api/auth/register",
        None,
        json!({ "name": "", "email": "bad", "password": "1" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let fields: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, ["email", "name", "password"]);
    assert_eq!(body["message"], "Valid email required");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = support::make_test_router();
    let (status, body) = get(&app, "/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "Khabor API");
    assert!(body["paths"]["/api/articles/{slug}"].is_object());
}

#[tokio::test]
async fn unknown_routes_are_404() {
    let app = support::make_test_router();
    for uri in ["/api/nothing-here", "/api/articles/sample-1/comments/1/extra"] {
        let (status, body) = get(&app, uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body["error"], "Not Found");
        assert_eq!(body["message"], "Not found");
    }
}

#[tokio::test]
async fn non_numeric_path_ids_are_json_404s() {
    let app = support::make_test_router();
    let (admin, _) = login_admin(&app).await;
    let (reader, _) = support::register_reader(&app, "reader-path@example.com").await;

    let cases = [
        (Method::DELETE, "/api/articles/sample-1/comments/abc", reader.as_str()),
        (Method::PATCH, "/api/auth/journalists/abc/approve", admin.as_str()),
        (Method::PATCH, "/api/auth/journalists/abc/reject", admin.as_str()),
        (Method::GET, "/api/articles/admin/by-author/xyz", admin.as_str()),
    ];
    for (method, uri, token) in cases {
        let (status, body) = send(&app, method, uri, Some(token), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body["error"], "Not Found");
        assert_eq!(body["message"], "Not found");
    }
}
