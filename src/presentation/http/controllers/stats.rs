use crate::application::dto::{JournalistScoreDto, ScoreDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::MaybeAuthenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/stats/me",
    responses(
        (status = 200, description = "Published articles created by the caller.", body = ScoreDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Stats"
)]
pub async fn my_score(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
) -> HttpResult<Json<ScoreDto>> {
    state
        .services
        .stats_queries
        .my_score(actor.0.as_ref())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/stats/journalists",
    responses(
        (status = 200, description = "Approved journalists with their scores.", body = [JournalistScoreDto]),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Forbidden.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Stats"
)]
pub async fn journalist_scores(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
) -> HttpResult<Json<Vec<JournalistScoreDto>>> {
    state
        .services
        .stats_queries
        .journalist_scores(actor.0.as_ref())
        .await
        .into_http()
        .map(Json)
}
