use crate::application::{commands::subscribers::SubscribeCommand, dto::SubscriptionDto};
use crate::domain::subscriber::SubscribeOutcome;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::validation::{Normalize, ValidatedJson, trim};
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SubscribeRequest {
    #[validate(email(message = "Valid email required"))]
    pub email: String,
}

impl Normalize for SubscribeRequest {
    fn normalize(&mut self) {
        trim(&mut self.email);
    }
}

#[utoipa::path(
    post,
    path = "/api/subscribers",
    request_body = SubscribeRequest,
    responses(
        (status = 201, description = "Subscribed.", body = SubscriptionDto),
        (status = 200, description = "Already subscribed.", body = SubscriptionDto),
        (status = 400, description = "Invalid email.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Subscribers"
)]
pub async fn subscribe(
    Extension(state): Extension<HttpState>,
    ValidatedJson(payload): ValidatedJson<SubscribeRequest>,
) -> HttpResult<(StatusCode, Json<SubscriptionDto>)> {
    let (outcome, subscription) = state
        .services
        .subscriber_commands
        .subscribe(SubscribeCommand {
            email: payload.email,
        })
        .await
        .into_http()?;
    let status = match outcome {
        SubscribeOutcome::Created => StatusCode::CREATED,
        SubscribeOutcome::AlreadySubscribed => StatusCode::OK,
    };
    Ok((status, Json(subscription)))
}
