// tests/support/helpers.rs
use std::sync::Arc;
use std::time::Duration;

use super::mocks::{DummyClock, DummyPasswordHasher, fixed_now};
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use khabor::application::{
    access::ArticleGate,
    services::{ApplicationServices, Ports, Repositories, ServiceOptions},
};
use khabor::config::{AllowedOrigins, StorageMode};
use khabor::infrastructure::{
    repositories::memory_repositories, security::BiscuitTokenManager, util::DefaultSlugGenerator,
};
use khabor::presentation::http::{
    routes::{RouterOptions, build_router_with_options},
    state::HttpState,
};
use serde_json::{Value, json};
use tower::util::ServiceExt as _;

pub const PASSWORD: &str = "secret123";

/// Router over fresh in-memory storage with the article gate enforced.
pub fn make_test_router() -> Router {
    make_test_router_with(ServiceOptions::default())
}

/// Router with the article gate bypassed, as in the default in-memory setup.
pub fn make_bypassed_router() -> Router {
    make_test_router_with(ServiceOptions {
        article_gate: ArticleGate::Bypassed,
        ..ServiceOptions::default()
    })
}

pub fn make_test_router_with(options: ServiceOptions) -> Router {
    make_test_router_over(memory_repositories(fixed_now()), options)
}

/// Router over caller-supplied repositories, so a test can inspect storage
/// directly after driving the HTTP surface.
pub fn make_test_router_over(repos: Repositories, options: ServiceOptions) -> Router {
    let ports = Ports {
        password_hasher: Arc::new(DummyPasswordHasher),
        token_manager: Arc::new(BiscuitTokenManager::ephemeral(Duration::from_secs(3600))),
        clock: Arc::new(DummyClock),
        slugger: Arc::new(DefaultSlugGenerator),
    };
    let services = Arc::new(ApplicationServices::new(
        repos,
        ports,
        options,
    ));
    let state = HttpState {
        services,
        mode: StorageMode::Memory,
    };
    build_router_with_options(
        state,
        RouterOptions {
            allowed_origins: AllowedOrigins::Any,
            rate_limit: false,
        },
    )
}

/// Sends one request and returns the status with the decoded JSON body
/// (`Value::Null` for an empty body).
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let resp = app.clone().oneshot(request).await.unwrap();
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 4 * 1024 * 1024)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            panic!("expected JSON body, got {}", String::from_utf8_lossy(&bytes))
        })
    };
    (status, json)
}

pub async fn get(app: &Router, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
    send(app, Method::GET, uri, token, None).await
}

pub async fn post(app: &Router, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, token, Some(body)).await
}

/// Asserts the error envelope: canonical reason plus the expected message.
pub fn assert_error(
    (status, body): &(StatusCode, Value),
    expected_status: StatusCode,
    expected_message: &str,
) {
    assert_eq!(*status, expected_status, "body: {body}");
    assert_eq!(
        body["error"],
        expected_status.canonical_reason().unwrap_or("error"),
        "body: {body}"
    );
    assert_eq!(body["message"], expected_message, "body: {body}");
}

/// Token and user id from an auth response.
pub fn credentials(body: &Value) -> (String, i64) {
    let token = body["token"].as_str().expect("token").to_string();
    let id = body["user"]["id"].as_i64().expect("user id");
    (token, id)
}

pub async fn register_reader(app: &Router, email: &str) -> (String, i64) {
    let (status, body) = post(
        app,
        "/api/auth/register",
        None,
        json!({ "name": "পাঠক", "email": email, "password": PASSWORD }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "body: {body}");
    credentials(&body)
}

pub async fn register_journalist(app: &Router, email: &str) -> (String, i64) {
    let (status, body) = post(
        app,
        "/api/auth/journalist/register",
        None,
        json!({ "name": "সাংবাদিক", "email": email, "password": PASSWORD }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "body: {body}");
    credentials(&body)
}

pub async fn login_admin(app: &Router) -> (String, i64) {
    let (status, body) = post(
        app,
        "/api/auth/facebook/mock",
        None,
        json!({ "accountType": "admin", "email": "admin@khabor.test", "name": "সম্পাদক" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "body: {body}");
    credentials(&body)
}

/// Registers a journalist and has the admin approve them.
pub async fn approved_journalist(app: &Router, admin_token: &str, email: &str) -> (String, i64) {
    let (token, id) = register_journalist(app, email).await;
    let (status, body) = send(
        app,
        Method::PATCH,
        &format!("/api/auth/journalists/{id}/approve"),
        Some(admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK, "body: {body}");
    (token, id)
}

/// Minimal valid article body.
pub fn article_payload(title: &str) -> Value {
    json!({
        "title": title,
        "category": "national",
        "tags": ["ঢাকা"],
        "author": "নিজস্ব প্রতিবেদক",
        "excerpt": "সংক্ষিপ্ত বিবরণ",
        "body": "বিস্তারিত সংবাদ"
    })
}

/// Slugs of an article list response, in order.
pub fn slugs(body: &Value) -> Vec<String> {
    body.as_array()
        .expect("array body")
        .iter()
        .map(|a| a["slug"].as_str().unwrap_or_default().to_string())
        .collect()
}

/// Percent-encodes a query-string value.
pub fn query_escape(value: &str) -> String {
    value
        .bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                (b as char).to_string()
            }
            other => format!("%{other:02X}"),
        })
        .collect()
}
