use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::{ArticleDto, Removed},
    queries::articles::{ArticleListParams, GetArticleBySlugQuery, ListArticlesByAuthorQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult, parse_path_id};
use crate::presentation::http::extractors::MaybeAuthenticated;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::validation::{Normalize, ValidatedJson, trim, trim_opt};
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize)]
pub struct ViewParams {
    pub view: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleRequest {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[validate(length(min = 1, message = "author is required"))]
    pub author: String,
    #[validate(length(min = 1, message = "excerpt is required"))]
    pub excerpt: String,
    #[validate(length(min = 1, message = "body is required"))]
    pub body: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    /// `draft` or `published` (default).
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

impl Normalize for CreateArticleRequest {
    fn normalize(&mut self) {
        trim(&mut self.title);
        trim_opt(&mut self.slug);
        trim(&mut self.category);
        trim(&mut self.author);
        trim(&mut self.excerpt);
        trim(&mut self.body);
    }
}

/// Every field is optional; absent fields keep their stored value.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticleRequest {
    #[validate(length(min = 1, message = "title must not be blank"))]
    pub title: Option<String>,
    pub slug: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub author: Option<String>,
    #[validate(length(min = 1, message = "excerpt must not be blank"))]
    pub excerpt: Option<String>,
    #[validate(length(min = 1, message = "body must not be blank"))]
    pub body: Option<String>,
    pub image_url: Option<String>,
    pub source: Option<String>,
    pub status: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

impl Normalize for UpdateArticleRequest {
    fn normalize(&mut self) {
        trim_opt(&mut self.title);
        trim_opt(&mut self.slug);
        trim_opt(&mut self.category);
        trim_opt(&mut self.author);
        trim_opt(&mut self.excerpt);
        trim_opt(&mut self.body);
    }
}

#[utoipa::path(
    get,
    path = "/api/articles",
    params(
        ("q" = Option<String>, Query, description = "Case-insensitive match on title or excerpt."),
        ("category" = Option<String>, Query, description = "Exact category."),
        ("tag" = Option<String>, Query, description = "Exact tag."),
        ("from" = Option<String>, Query, description = "Earliest publication date (RFC 3339 or YYYY-MM-DD)."),
        ("to" = Option<String>, Query, description = "Latest publication date (RFC 3339 or YYYY-MM-DD)."),
        ("sort" = Option<String>, Query, description = "`views` or recency (default)."),
        ("trending" = Option<String>, Query, description = "Restrict to the last 7 days."),
        ("limit" = Option<String>, Query, description = "Page size, default 10, at most 50."),
        ("page" = Option<String>, Query, description = "1-based page number.")
    ),
    responses(
        (status = 200, description = "Published articles.", body = [ArticleDto])
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_articles(params)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/articles/admin/all",
    responses(
        (status = 200, description = "All articles including drafts, newest first.", body = [ArticleDto]),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Forbidden.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn list_all_articles(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_newsroom(actor.0.as_ref(), params)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/articles/admin/by-author/{id}",
    params(("id" = i64, Path, description = "Creator user id.")),
    responses(
        (status = 200, description = "Articles created by the user, newest first.", body = [ArticleDto]),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Forbidden.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn list_articles_by_author(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(user_id): Path<String>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    let user_id = parse_path_id(&user_id)?;
    state
        .services
        .article_queries
        .list_by_author(actor.0.as_ref(), ListArticlesByAuthorQuery { user_id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/articles/{slug}",
    params(
        ("slug" = String, Path, description = "Article slug."),
        ("view" = Option<String>, Query, description = "`1` counts a view.")
    ),
    responses(
        (status = 200, description = "The article.", body = ArticleDto),
        (status = 404, description = "Unknown slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    Query(params): Query<ViewParams>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_slug(GetArticleBySlugQuery {
            slug,
            view: params.view,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = ArticleDto),
        (status = 400, description = "Missing or invalid fields.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Forbidden or awaiting approval.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug already in use.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    ValidatedJson(payload): ValidatedJson<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = CreateArticleCommand {
        title: payload.title,
        slug: payload.slug,
        category: payload.category,
        tags: payload.tags,
        author: payload.author,
        excerpt: payload.excerpt,
        body: payload.body,
        image_url: payload.image_url,
        source: payload.source,
        status: payload.status,
        published_at: payload.published_at,
    };

    let article = state
        .services
        .article_commands
        .create_article(actor.0.as_ref(), command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(article)))
}

#[utoipa::path(
    put,
    path = "/api/articles/{key}",
    params(("key" = String, Path, description = "Numeric id or slug.")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Updated article.", body = ArticleDto),
        (status = 400, description = "Invalid fields.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Forbidden or awaiting approval.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown article.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug in use or concurrent edit.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(key): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        key,
        title: payload.title,
        slug: payload.slug,
        category: payload.category,
        tags: payload.tags,
        author: payload.author,
        excerpt: payload.excerpt,
        body: payload.body,
        image_url: payload.image_url,
        source: payload.source,
        status: payload.status,
        published_at: payload.published_at,
    };

    state
        .services
        .article_commands
        .update_article(actor.0.as_ref(), command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/articles/{key}",
    params(("key" = String, Path, description = "Numeric id or slug.")),
    responses(
        (status = 200, description = "The removed article.", body = crate::presentation::http::openapi::RemovedArticleResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Forbidden.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(key): Path<String>,
) -> HttpResult<Json<Removed<ArticleDto>>> {
    state
        .services
        .article_commands
        .delete_article(actor.0.as_ref(), DeleteArticleCommand { key })
        .await
        .into_http()
        .map(Json)
}
