use crate::application::{
    commands::comments::{AddCommentCommand, DeleteCommentCommand},
    dto::{CommentDto, Removed},
    queries::comments::ListCommentsQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult, parse_path_id};
use crate::presentation::http::extractors::MaybeAuthenticated;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::validation::{Normalize, ValidatedJson, trim};
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CommentRequest {
    #[validate(length(min = 1, message = "Comment text required"))]
    pub text: String,
}

impl Normalize for CommentRequest {
    fn normalize(&mut self) {
        trim(&mut self.text);
    }
}

#[utoipa::path(
    get,
    path = "/api/articles/{slug}/comments",
    params(("slug" = String, Path, description = "Article slug.")),
    responses(
        (status = 200, description = "Comments, newest first.", body = [CommentDto]),
        (status = 404, description = "Unknown article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<Vec<CommentDto>>> {
    state
        .services
        .comment_queries
        .list_comments(ListCommentsQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/articles/{slug}/comments",
    params(("slug" = String, Path, description = "Article slug.")),
    request_body = CommentRequest,
    responses(
        (status = 201, description = "Comment added.", body = CommentDto),
        (status = 400, description = "Blank text.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Comments"
)]
pub async fn add_comment(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(slug): Path<String>,
    ValidatedJson(payload): ValidatedJson<CommentRequest>,
) -> HttpResult<(StatusCode, Json<CommentDto>)> {
    let comment = state
        .services
        .comment_commands
        .add_comment(
            actor.0.as_ref(),
            AddCommentCommand {
                slug,
                text: payload.text,
            },
        )
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(comment)))
}

#[utoipa::path(
    delete,
    path = "/api/articles/{slug}/comments/{comment_id}",
    params(
        ("slug" = String, Path, description = "Article slug."),
        ("comment_id" = i64, Path, description = "Comment id.")
    ),
    responses(
        (status = 200, description = "The removed comment.", body = crate::presentation::http::openapi::RemovedCommentResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Not the author.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown comment.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Comments"
)]
pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path((slug, comment_id)): Path<(String, String)>,
) -> HttpResult<Json<Removed<CommentDto>>> {
    let comment_id = parse_path_id(&comment_id)?;
    state
        .services
        .comment_commands
        .delete_comment(actor.0.as_ref(), DeleteCommentCommand { slug, comment_id })
        .await
        .into_http()
        .map(Json)
}
