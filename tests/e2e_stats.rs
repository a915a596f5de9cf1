// tests/e2e_stats.rs
use axum::http::{Method, StatusCode};
use serde_json::json;

mod support;

use support::{
    approved_journalist, article_payload, assert_error, get, login_admin, post,
    register_journalist, register_reader, send,
};

#[tokio::test]
async fn score_counts_published_articles_only() {
    let app = support::make_test_router();
    let (admin, _) = login_admin(&app).await;
    let (journalist, _) = approved_journalist(&app, &admin, "reporter@khabor.test").await;

    let (_, body) = get(&app, "/api/stats/me", Some(&journalist)).await;
    assert_eq!(body["score"], 0);

    post(&app, "/api/articles", Some(&journalist), article_payload("One")).await;
    post(&app, "/api/articles", Some(&journalist), article_payload("Two")).await;
    let mut draft = article_payload("Three");
    draft["status"] = json!("draft");
    post(&app, "/api/articles", Some(&journalist), draft).await;

    let (status, body) = get(&app, "/api/stats/me", Some(&journalist)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"], 2);

    // Deleting a published article lowers the score.
    send(&app, Method::DELETE, "/api/articles/one-1717221600000", Some(&admin), None).await;
    let (_, body) = get(&app, "/api/stats/me", Some(&journalist)).await;
    assert_eq!(body["score"], 1);
}

#[tokio::test]
async fn any_signed_in_user_has_a_score() {
    let app = support::make_test_router();
    let (reader, _) = register_reader(&app, "reader@khabor.test").await;
    let (status, body) = get(&app, "/api/stats/me", Some(&reader)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"], 0);

    let resp = get(&app, "/api/stats/me", None).await;
    assert_error(&resp, StatusCode::UNAUTHORIZED, "Authorization required.");
}

#[tokio::test]
async fn admins_see_approved_journalist_scores() {
    let app = support::make_test_router();
    let (admin, _) = login_admin(&app).await;
    let (first, first_id) = approved_journalist(&app, &admin, "first@khabor.test").await;
    let (_, second_id) = approved_journalist(&app, &admin, "second@khabor.test").await;
    register_journalist(&app, "pending@khabor.test").await;

    post(&app, "/api/articles", Some(&first), article_payload("Scoop")).await;

    let (status, body) = get(&app, "/api/stats/journalists", Some(&admin)).await;
    assert_eq!(status, StatusCode::OK, "body: {body}");
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["id"], second_id);
    assert_eq!(rows[0]["score"], 0);
    assert_eq!(rows[1]["id"], first_id);
    assert_eq!(rows[1]["email"], "first@khabor.test");
    assert_eq!(rows[1]["score"], 1);

    let resp = get(&app, "/api/stats/journalists", Some(&first)).await;
    assert_error(&resp, StatusCode::FORBIDDEN, "Forbidden.");
}
