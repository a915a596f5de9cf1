// tests/e2e_articles.rs
use axum::http::StatusCode;

mod support;

use support::{get, query_escape, slugs};

#[tokio::test]
async fn public_listing_defaults_to_recency() {
    let app = support::make_test_router();
    let resp = get(&app, "/api/articles", None).await;
    assert_eq!(resp.0, StatusCode::OK);
    assert_eq!(
        slugs(&resp.1),
        ["sample-1", "sample-2", "sample-3", "sample-4", "sample-5", "sample-6"]
    );
    assert!(resp.1[0]["publishedAt"].is_string());
    assert_eq!(resp.1[0]["status"], "published");
}

#[tokio::test]
async fn sort_by_views() {
    let app = support::make_test_router();
    let (_, body) = get(&app, "/api/articles?sort=views", None).await;
    assert_eq!(
        slugs(&body),
        ["sample-6", "sample-2", "sample-5", "sample-1", "sample-3", "sample-4"]
    );

    let (_, body) = get(&app, "/api/articles?sort=bogus", None).await;
    assert_eq!(slugs(&body)[0], "sample-1");
}

#[tokio::test]
async fn trending_keeps_the_last_seven_days() {
    let app = support::make_test_router();
    let (_, body) = get(&app, "/api/articles?trending=1", None).await;
    assert_eq!(
        slugs(&body),
        ["sample-1", "sample-2", "sample-3", "sample-4", "sample-5"]
    );

    let (_, body) = get(&app, "/api/articles?trending=false", None).await;
    assert_eq!(slugs(&body).len(), 6);
}

#[tokio::test]
async fn trending_and_from_use_the_later_bound() {
    let app = support::make_test_router();
    let (_, body) = get(&app, "/api/articles?trending=1&from=2024-05-31", None).await;
    assert_eq!(slugs(&body), ["sample-1", "sample-2"]);

    let (_, body) = get(&app, "/api/articles?trending=1&from=2024-01-01", None).await;
    assert_eq!(slugs(&body).len(), 5);
}

#[tokio::test]
async fn date_range_is_inclusive_and_bad_dates_are_ignored() {
    let app = support::make_test_router();
    let (_, body) = get(&app, "/api/articles?from=2024-05-29&to=2024-05-31", None).await;
    assert_eq!(slugs(&body), ["sample-3", "sample-4"]);

    let (_, body) = get(
        &app,
        &format!(
            "/api/articles?to={}",
            query_escape("2024-05-29T04:00:00Z")
        ),
        None,
    )
    .await;
    assert_eq!(slugs(&body), ["sample-4", "sample-5", "sample-6"]);

    let (status, body) = get(&app, "/api/articles?from=yesterday&to=soon", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(slugs(&body).len(), 6);
}

#[tokio::test]
async fn category_tag_and_text_filters_combine() {
    let app = support::make_test_router();
    let (_, body) = get(&app, "/api/articles?category=sports", None).await;
    assert_eq!(slugs(&body), ["sample-2"]);

    let uri = format!("/api/articles?tag={}", query_escape("ক্রিকেট"));
    let (_, body) = get(&app, &uri, None).await;
    assert_eq!(slugs(&body), ["sample-2"]);

    // Matches one title and one excerpt.
    let uri = format!("/api/articles?q={}", query_escape("রপ্তানি"));
    let (_, body) = get(&app, &uri, None).await;
    assert_eq!(slugs(&body), ["sample-3", "sample-4"]);

    let uri = format!("/api/articles?q={}&category=tech", query_escape("রপ্তানি"));
    let (_, body) = get(&app, &uri, None).await;
    assert_eq!(slugs(&body), ["sample-4"]);

    let (_, body) = get(&app, "/api/articles?category=sports&tag=politics", None).await;
    assert!(slugs(&body).is_empty());
}

#[tokio::test]
async fn pagination_windows_and_fallbacks() {
    let app = support::make_test_router();
    let (_, body) = get(&app, "/api/articles?limit=2&page=2", None).await;
    assert_eq!(slugs(&body), ["sample-3", "sample-4"]);

    let (_, body) = get(&app, "/api/articles?limit=2&page=9", None).await;
    assert!(slugs(&body).is_empty());

    let (_, body) = get(&app, "/api/articles?limit=abc&page=-3", None).await;
    assert_eq!(slugs(&body).len(), 6);
    assert_eq!(slugs(&body)[0], "sample-1");
}

#[tokio::test]
async fn view_flag_increments_exactly_once() {
    let app = support::make_test_router();
    let (status, body) = get(&app, "/api/articles/sample-1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["views"], 120);

    let (_, body) = get(&app, "/api/articles/sample-1?view=1", None).await;
    assert_eq!(body["views"], 121);

    let (_, body) = get(&app, "/api/articles/sample-1?view=true", None).await;
    assert_eq!(body["views"], 121);

    let (_, body) = get(&app, "/api/articles/sample-1?view=1", None).await;
    assert_eq!(body["views"], 122);

    let (_, body) = get(&app, "/api/articles?sort=views&limit=50", None).await;
    let sample_one = body
        .as_array()
        .unwrap()
        .iter()
        .find(|a| a["slug"] == "sample-1")
        .unwrap();
    assert_eq!(sample_one["views"], 122);
}

#[tokio::test]
async fn unknown_slug_is_404() {
    let app = support::make_test_router();
    let resp = get(&app, "/api/articles/no-such-story?view=1", None).await;
    support::assert_error(&resp, StatusCode::NOT_FOUND, "Not found");
}
