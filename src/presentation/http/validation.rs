use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use validator::Validate;

use super::error::HttpError;

/// Request bodies whose string fields are trimmed before validation.
pub trait Normalize {
    fn normalize(&mut self);
}

/// JSON body that has been trimmed and passed `validator` checks.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Normalize,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(mut value) = Json::<T>::from_request(req, state)
            .await
            .map_err(HttpError::from_json_rejection)?;
        value.normalize();
        value.validate().map_err(HttpError::from_validation)?;
        Ok(Self(value))
    }
}

pub fn trim(value: &mut String) {
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
}

pub fn trim_opt(value: &mut Option<String>) {
    if let Some(inner) = value.as_mut() {
        trim(inner);
    }
}
