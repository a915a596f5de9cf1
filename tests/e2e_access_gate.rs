// tests/e2e_access_gate.rs
use axum::http::{Method, StatusCode};
use serde_json::json;

mod support;

use support::{
    approved_journalist, article_payload, assert_error, get, login_admin, post,
    register_journalist, register_reader, send, slugs,
};

#[tokio::test]
async fn anonymous_create_is_401() {
    let app = support::make_test_router();
    let resp = post(&app, "/api/articles", None, article_payload("শিরোনাম")).await;
    assert_error(&resp, StatusCode::UNAUTHORIZED, "Authorization required.");
}

#[tokio::test]
async fn readers_are_forbidden() {
    let app = support::make_test_router();
    let (reader, _) = register_reader(&app, "reader@khabor.test").await;
    let resp = post(&app, "/api/articles", Some(&reader), article_payload("শিরোনাম")).await;
    assert_error(&resp, StatusCode::FORBIDDEN, "Forbidden.");
}

#[tokio::test]
async fn pending_journalists_need_approval() {
    let app = support::make_test_router();
    let (pending, _) = register_journalist(&app, "new@khabor.test").await;
    let resp = post(&app, "/api/articles", Some(&pending), article_payload("শিরোনাম")).await;
    assert_error(&resp, StatusCode::FORBIDDEN, "Approval required.");

    // The newsroom listing only checks the role.
    let (status, _) = get(&app, "/api/articles/admin/all", Some(&pending)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn approval_takes_effect_on_existing_tokens() {
    let app = support::make_test_router();
    let (admin, _) = login_admin(&app).await;
    let (journalist, id) = approved_journalist(&app, &admin, "reporter@khabor.test").await;

    let (status, body) = post(&app, "/api/articles", Some(&journalist), article_payload("Hello World")).await;
    assert_eq!(status, StatusCode::CREATED, "body: {body}");
    assert_eq!(body["createdBy"], id);
    assert_eq!(body["status"], "published");
    assert_eq!(body["publishedAt"], "2024-06-01T06:00:00+00:00");
    assert_eq!(body["slug"], "hello-world-1717221600000");
    assert_eq!(body["views"], 0);
}

#[tokio::test]
async fn generated_slugs_stay_unique_and_explicit_duplicates_conflict() {
    let app = support::make_test_router();
    let (admin, _) = login_admin(&app).await;

    let (_, first) = post(&app, "/api/articles", Some(&admin), article_payload("Hello World")).await;
    let (_, second) = post(&app, "/api/articles", Some(&admin), article_payload("Hello World")).await;
    assert_eq!(first["slug"], "hello-world-1717221600000");
    assert_eq!(second["slug"], "hello-world-1717221600000-1");

    let mut payload = article_payload("Another");
    payload["slug"] = json!("sample-1");
    let resp = post(&app, "/api/articles", Some(&admin), payload).await;
    assert_error(&resp, StatusCode::CONFLICT, "slug 'sample-1' is already in use");
}

#[tokio::test]
async fn missing_fields_are_rejected_before_the_store() {
    let app = support::make_test_router();
    let (admin, _) = login_admin(&app).await;
    let mut payload = article_payload("শিরোনাম");
    payload["category"] = json!("   ");
    let (status, body) = post(&app, "/api/articles", Some(&admin), payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "category is required");
    assert_eq!(body["errors"][0]["field"], "category");
}

#[tokio::test]
async fn drafts_stay_out_of_public_listings_until_published() {
    let app = support::make_test_router();
    let (admin, _) = login_admin(&app).await;

    let mut payload = article_payload("Draft Story");
    payload["status"] = json!("draft");
    let (status, draft) = post(&app, "/api/articles", Some(&admin), payload).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(draft["publishedAt"].is_null());
    let slug = draft["slug"].as_str().unwrap().to_string();

    let (_, public) = get(&app, "/api/articles", None).await;
    assert!(!slugs(&public).contains(&slug));
    let (_, newsroom) = get(&app, "/api/articles/admin/all", Some(&admin)).await;
    assert_eq!(slugs(&newsroom)[0], slug);

    let id = draft["id"].as_i64().unwrap();
    let (status, published) = send(
        &app,
        Method::PUT,
        &format!("/api/articles/{id}"),
        Some(&admin),
        Some(json!({ "status": "published" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "body: {published}");
    assert_eq!(published["publishedAt"], "2024-06-01T06:00:00+00:00");

    let (_, public) = get(&app, "/api/articles", None).await;
    assert_eq!(slugs(&public)[0], slug);
}

#[tokio::test]
async fn all_digit_slugs_remain_addressable() {
    let app = support::make_test_router();
    let (admin, _) = login_admin(&app).await;

    let mut payload = article_payload("বছরের সেরা ঘটনা");
    payload["slug"] = json!("2024");
    let (status, created) = post(&app, "/api/articles", Some(&admin), payload).await;
    assert_eq!(status, StatusCode::CREATED, "body: {created}");
    assert_eq!(created["slug"], "2024");

    let (status, updated) = send(
        &app,
        Method::PUT,
        "/api/articles/2024",
        Some(&admin),
        Some(json!({ "excerpt": "হালনাগাদ" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "body: {updated}");
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["excerpt"], "হালনাগাদ");

    let (status, removed) =
        send(&app, Method::DELETE, "/api/articles/2024", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(removed["removed"]["slug"], "2024");

    let resp = send(&app, Method::DELETE, "/api/articles/2024", Some(&admin), None).await;
    assert_error(&resp, StatusCode::NOT_FOUND, "Article not found");
}

#[tokio::test]
async fn updates_accept_slugs_and_reject_blank_fields() {
    let app = support::make_test_router();
    let (admin, _) = login_admin(&app).await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/articles/sample-3",
        Some(&admin),
        Some(json!({ "excerpt": "নতুন সারাংশ", "tags": ["অর্থনীতি", " ", "রপ্তানি"] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "body: {body}");
    assert_eq!(body["excerpt"], "নতুন সারাংশ");
    assert_eq!(body["tags"], json!(["অর্থনীতি", "রপ্তানি"]));
    assert_eq!(body["title"], "রপ্তানি আয়ে নতুন রেকর্ড");

    let resp = send(
        &app,
        Method::PUT,
        "/api/articles/sample-3",
        Some(&admin),
        Some(json!({ "title": "  " })),
    )
    .await;
    assert_error(&resp, StatusCode::BAD_REQUEST, "title must not be blank");

    let resp = send(
        &app,
        Method::PUT,
        "/api/articles/sample-3",
        Some(&admin),
        Some(json!({ "slug": "sample-4" })),
    )
    .await;
    assert_eq!(resp.0, StatusCode::CONFLICT);

    let resp = send(
        &app,
        Method::PUT,
        "/api/articles/999",
        Some(&admin),
        Some(json!({ "excerpt": "x" })),
    )
    .await;
    assert_error(&resp, StatusCode::NOT_FOUND, "Article not found");
}

#[tokio::test]
async fn only_admins_delete() {
    let app = support::make_test_router();
    let (admin, _) = login_admin(&app).await;
    let (journalist, _) = approved_journalist(&app, &admin, "reporter@khabor.test").await;

    let resp = send(&app, Method::DELETE, "/api/articles/sample-2", Some(&journalist), None).await;
    assert_error(&resp, StatusCode::FORBIDDEN, "Forbidden.");

    let (status, body) = send(&app, Method::DELETE, "/api/articles/sample-2", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["removed"]["slug"], "sample-2");

    let (status, _) = get(&app, "/api/articles/sample-2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn admin_listing_by_author() {
    let app = support::make_test_router();
    let (admin, _) = login_admin(&app).await;
    let (journalist, id) = approved_journalist(&app, &admin, "reporter@khabor.test").await;
    post(&app, "/api/articles", Some(&journalist), article_payload("First")).await;
    post(&app, "/api/articles", Some(&journalist), article_payload("Second")).await;

    let uri = format!("/api/articles/admin/by-author/{id}");
    let (status, body) = get(&app, &uri, Some(&admin)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        slugs(&body),
        ["second-1717221600000", "first-1717221600000"]
    );

    let resp = get(&app, &uri, Some(&journalist)).await;
    assert_error(&resp, StatusCode::FORBIDDEN, "Forbidden.");
}

#[tokio::test]
async fn bangla_titles_get_transliterated_unique_slugs() {
    let app = support::make_test_router();
    let (admin, _) = login_admin(&app).await;

    let (status, first) = post(&app, "/api/articles", Some(&admin), article_payload("বাংলা সংবাদ")).await;
    assert_eq!(status, StatusCode::CREATED, "body: {first}");
    let slug = first["slug"].as_str().unwrap().to_string();
    assert!(slug.ends_with("-1717221600000"), "slug: {slug}");
    assert!(slug.len() > "-1717221600000".len(), "slug: {slug}");
    assert!(slug.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'));

    let (_, second) = post(&app, "/api/articles", Some(&admin), article_payload("বাংলা সংবাদ")).await;
    assert_eq!(second["slug"], format!("{slug}-1"));
}

#[tokio::test]
async fn bypassed_gate_lets_pending_journalists_publish() {
    let app = support::make_bypassed_router();
    let (pending, id) = register_journalist(&app, "new@khabor.test").await;

    let (status, body) = post(&app, "/api/articles", Some(&pending), article_payload("Fresh")).await;
    assert_eq!(status, StatusCode::CREATED, "body: {body}");
    assert_eq!(body["createdBy"], id);
}

#[tokio::test]
async fn bypassed_gate_lets_anyone_manage_articles() {
    let app = support::make_bypassed_router();

    let (status, body) = post(&app, "/api/articles", None, article_payload("Open Newsroom")).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["createdBy"].is_null());

    let (status, _) = get(&app, "/api/articles/admin/all", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::DELETE, "/api/articles/sample-6", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["removed"]["slug"], "sample-6");

    // Non-article routes are still enforced.
    let resp = get(&app, "/api/stats/journalists", None).await;
    assert_error(&resp, StatusCode::UNAUTHORIZED, "Authorization required.");
}
