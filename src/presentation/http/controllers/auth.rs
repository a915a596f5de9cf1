use crate::application::{
    commands::users::{
        FacebookAccountType, FacebookMockCommand, LoginAudience, LoginUserCommand,
        RegisterUserCommand, ReviewJournalistCommand,
    },
    dto::{AuthResponse, UserDto},
    queries::users::ListJournalistsQuery,
};
use crate::domain::user::ReviewDecision;
use crate::presentation::http::error::{HttpResult, IntoHttpResult, parse_path_id};
use crate::presentation::http::extractors::MaybeAuthenticated;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::validation::{Normalize, ValidatedJson, trim, trim_opt};
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Name required"))]
    pub name: String,
    #[validate(email(message = "Valid email required"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password too short"))]
    pub password: String,
    /// Honoured only when role registration is enabled.
    #[serde(default)]
    pub role: Option<String>,
}

impl Normalize for RegisterRequest {
    fn normalize(&mut self) {
        trim(&mut self.name);
        trim(&mut self.email);
        trim_opt(&mut self.role);
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password required"))]
    pub password: String,
}

impl Normalize for LoginRequest {
    fn normalize(&mut self) {
        trim(&mut self.email);
    }
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FacebookMockRequest {
    /// `admin`, `journalist` or anything else for a reader.
    #[serde(default)]
    pub account_type: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl Normalize for FacebookMockRequest {
    fn normalize(&mut self) {
        trim_opt(&mut self.account_type);
        trim_opt(&mut self.email);
        trim_opt(&mut self.name);
    }
}

#[derive(Debug, Deserialize)]
pub struct JournalistListParams {
    pub status: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created and signed in.", body = AuthResponse),
        (status = 400, description = "Invalid input or email already registered.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn register(
    Extension(state): Extension<HttpState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> HttpResult<(StatusCode, Json<AuthResponse>)> {
    let command = RegisterUserCommand {
        name: payload.name,
        email: payload.email,
        password: payload.password,
        role: payload.role,
    };

    let response = state
        .services
        .user_commands
        .register(command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/auth/journalist/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Journalist account created, pending approval.", body = AuthResponse),
        (status = 400, description = "Invalid input or email already registered.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn register_journalist(
    Extension(state): Extension<HttpState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> HttpResult<(StatusCode, Json<AuthResponse>)> {
    let command = RegisterUserCommand {
        name: payload.name,
        email: payload.email,
        password: payload.password,
        role: None,
    };

    let response = state
        .services
        .user_commands
        .register_journalist(command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn login_as(
    state: HttpState,
    payload: LoginRequest,
    audience: LoginAudience,
) -> HttpResult<Json<AuthResponse>> {
    let command = LoginUserCommand {
        email: payload.email,
        password: payload.password,
        audience,
    };

    state
        .services
        .user_commands
        .login(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in.", body = AuthResponse),
        (status = 400, description = "Invalid credentials.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> HttpResult<Json<AuthResponse>> {
    login_as(state, payload, LoginAudience::Reader).await
}

#[utoipa::path(
    post,
    path = "/api/auth/journalist/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in to the newsroom.", body = AuthResponse),
        (status = 400, description = "Invalid credentials.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Not a journalist account.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn journalist_login(
    Extension(state): Extension<HttpState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> HttpResult<Json<AuthResponse>> {
    login_as(state, payload, LoginAudience::Journalist).await
}

#[utoipa::path(
    post,
    path = "/api/auth/facebook/mock",
    request_body = FacebookMockRequest,
    responses(
        (status = 200, description = "Signed in with a mock social account.", body = AuthResponse)
    ),
    tag = "Auth"
)]
pub async fn facebook_mock(
    Extension(state): Extension<HttpState>,
    ValidatedJson(payload): ValidatedJson<FacebookMockRequest>,
) -> HttpResult<Json<AuthResponse>> {
    let command = FacebookMockCommand {
        account_type: FacebookAccountType::parse(payload.account_type.as_deref()),
        email: payload.email,
        name: payload.name,
    };

    state
        .services
        .user_commands
        .facebook_mock(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "The signed-in user.", body = UserDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Auth"
)]
pub async fn profile(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_queries
        .get_profile(actor.0.as_ref())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/auth/journalists",
    params(("status" = Option<String>, Query, description = "`pending`, `approved` or `rejected`.")),
    responses(
        (status = 200, description = "Journalist accounts, newest first.", body = [UserDto]),
        (status = 400, description = "Unknown status.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Forbidden.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Users"
)]
pub async fn list_journalists(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Query(params): Query<JournalistListParams>,
) -> HttpResult<Json<Vec<UserDto>>> {
    state
        .services
        .user_queries
        .list_journalists(
            actor.0.as_ref(),
            ListJournalistsQuery {
                status: params.status,
            },
        )
        .await
        .into_http()
        .map(Json)
}

async fn review(
    state: HttpState,
    actor: MaybeAuthenticated,
    user_id: i64,
    decision: ReviewDecision,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_commands
        .review_journalist(actor.0.as_ref(), ReviewJournalistCommand { user_id, decision })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    patch,
    path = "/api/auth/journalists/{id}/approve",
    params(("id" = i64, Path, description = "Journalist user id.")),
    responses(
        (status = 200, description = "Journalist approved.", body = UserDto),
        (status = 404, description = "Unknown journalist.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Already reviewed.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Users"
)]
pub async fn approve_journalist(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<UserDto>> {
    review(state, actor, parse_path_id(&id)?, ReviewDecision::Approve).await
}

#[utoipa::path(
    patch,
    path = "/api/auth/journalists/{id}/reject",
    params(("id" = i64, Path, description = "Journalist user id.")),
    responses(
        (status = 200, description = "Journalist rejected.", body = UserDto),
        (status = 404, description = "Unknown journalist.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Already reviewed.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Users"
)]
pub async fn reject_journalist(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<UserDto>> {
    review(state, actor, parse_path_id(&id)?, ReviewDecision::Reject).await
}
