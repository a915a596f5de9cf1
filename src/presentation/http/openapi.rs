use crate::application::dto::{
    ArticleDto, AuthResponse, CommentDto, JournalistScoreDto, ScoreDto, SubscriptionDto, UserDto,
};
use axum::{Json, Router, routing::get};
use serde::Serialize;
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};

#[derive(Debug, Serialize, ToSchema)]
pub struct RemovedArticleResponse {
    pub removed: ArticleDto,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RemovedCommentResponse {
    pub removed: CommentDto,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::system::health,
        crate::presentation::http::controllers::auth::register,
        crate::presentation::http::controllers::auth::register_journalist,
        crate::presentation::http::controllers::auth::login,
        crate::presentation::http::controllers::auth::journalist_login,
        crate::presentation::http::controllers::auth::facebook_mock,
        crate::presentation::http::controllers::auth::profile,
        crate::presentation::http::controllers::auth::list_journalists,
        crate::presentation::http::controllers::auth::approve_journalist,
        crate::presentation::http::controllers::auth::reject_journalist,
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::list_all_articles,
        crate::presentation::http::controllers::articles::list_articles_by_author,
        crate::presentation::http::controllers::articles::get_article_by_slug,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::delete_article,
        crate::presentation::http::controllers::comments::list_comments,
        crate::presentation::http::controllers::comments::add_comment,
        crate::presentation::http::controllers::comments::delete_comment,
        crate::presentation::http::controllers::subscribers::subscribe,
        crate::presentation::http::controllers::stats::my_score,
        crate::presentation::http::controllers::stats::journalist_scores
    ),
    components(
        schemas(
            RemovedArticleResponse,
            RemovedCommentResponse,
            crate::presentation::http::controllers::system::StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::error::FieldError,
            crate::presentation::http::controllers::auth::RegisterRequest,
            crate::presentation::http::controllers::auth::LoginRequest,
            crate::presentation::http::controllers::auth::FacebookMockRequest,
            crate::presentation::http::controllers::articles::CreateArticleRequest,
            crate::presentation::http::controllers::articles::UpdateArticleRequest,
            crate::presentation::http::controllers::comments::CommentRequest,
            crate::presentation::http::controllers::subscribers::SubscribeRequest,
            ArticleDto,
            AuthResponse,
            CommentDto,
            JournalistScoreDto,
            ScoreDto,
            SubscriptionDto,
            UserDto
        )
    ),
    tags(
        (name = "Auth", description = "Registration, login and the current user"),
        (name = "Users", description = "Journalist review"),
        (name = "Articles", description = "Article listing and editing"),
        (name = "Comments", description = "Reader comments"),
        (name = "Subscribers", description = "Newsletter sign-up"),
        (name = "Stats", description = "Journalist scores"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Khabor API",
        description = "Bangla news portal backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme(
            "bearerAuth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

pub async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    Router::new()
        .route("/openapi.json", get(serve_openapi))
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_routes_and_bearer_scheme() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for expected in [
            "/api/articles",
            "/api/articles/{slug}",
            "/api/articles/admin/all",
            "/api/auth/register",
            "/api/subscribers",
            "/api/stats/journalists",
        ] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearerAuth"));
        assert!(components.schemas.contains_key("RemovedCommentResponse"));
    }

    #[test]
    fn removed_wrappers_serialize_the_dto_under_removed() {
        let body = RemovedCommentResponse {
            removed: CommentDto {
                id: 3,
                author_name: "পাঠক".into(),
                text: "মন্তব্য".into(),
                created_at: chrono::DateTime::<chrono::Utc>::UNIX_EPOCH,
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["removed"]["authorName"], "পাঠক");
        assert_eq!(json["removed"]["createdAt"], "1970-01-01T00:00:00+00:00");
    }
}
