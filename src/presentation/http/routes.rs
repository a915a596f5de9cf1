use crate::config::AllowedOrigins;
use crate::presentation::http::controllers::{
    articles, auth, comments, stats, subscribers, system,
};
use crate::presentation::http::{middleware::rate_limit, openapi, state::HttpState};
use axum::{
    Extension, Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    routing::{delete, get, patch, post},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

const BODY_LIMIT_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone)]
pub struct RouterOptions {
    pub allowed_origins: AllowedOrigins,
    pub rate_limit: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            allowed_origins: AllowedOrigins::Any,
            rate_limit: true,
        }
    }
}

pub fn build_router(state: HttpState) -> Router {
    build_router_with_options(state, RouterOptions::default())
}

pub fn build_router_with_options(state: HttpState, options: RouterOptions) -> Router {
    Router::new()
        .merge(openapi::docs_router())
        .route("/", get(system::health))
        .route("/health", get(system::health))
        .nest("/api/auth", auth_routes(options.rate_limit))
        .route(
            "/api/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route("/api/articles/admin/all", get(articles::list_all_articles))
        .route(
            "/api/articles/admin/by-author/{id}",
            get(articles::list_articles_by_author),
        )
        .route(
            "/api/articles/{slug}",
            get(articles::get_article_by_slug)
                .put(articles::update_article)
                .delete(articles::delete_article),
        )
        .route(
            "/api/articles/{slug}/comments",
            get(comments::list_comments).post(comments::add_comment),
        )
        .route(
            "/api/articles/{slug}/comments/{comment_id}",
            delete(comments::delete_comment),
        )
        .route("/api/subscribers", post(subscribers::subscribe))
        .route("/api/stats/me", get(stats::my_score))
        .route("/api/stats/journalists", get(stats::journalist_scores))
        .fallback(system::not_found)
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&options.allowed_origins))
        .layer(Extension(state))
}

fn auth_routes(rate_limited: bool) -> Router {
    let routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/journalist/register", post(auth::register_journalist))
        .route("/journalist/login", post(auth::journalist_login))
        .route("/facebook/mock", post(auth::facebook_mock))
        .route("/me", get(auth::profile))
        .route("/journalists", get(auth::list_journalists))
        .route("/journalists/{id}/approve", patch(auth::approve_journalist))
        .route("/journalists/{id}/reject", patch(auth::reject_journalist));

    if !rate_limited {
        return routes;
    }
    match rate_limit::rate_limit_layer() {
        Some(layer) => routes.layer(layer),
        None => {
            tracing::warn!("rate limit configuration rejected; auth routes are unthrottled");
            routes
        }
    }
}

fn cors_layer(origins: &AllowedOrigins) -> CorsLayer {
    let allow_origin = match origins {
        AllowedOrigins::Any => AllowOrigin::from(Any),
        AllowedOrigins::List(list) => AllowOrigin::list(
            list.iter()
                .filter_map(|origin| HeaderValue::from_str(origin).ok()),
        ),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}
