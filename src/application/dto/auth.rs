use crate::domain::user::{ApprovalStatus, Role, User, UserId};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::{serde_time, users::UserDto};

/// A freshly signed token as produced by the token manager.
#[derive(Debug, Clone)]
pub struct AuthTokenDto {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    #[serde(serialize_with = "serde_time::rfc3339")]
    pub expires_at: DateTime<Utc>,
    pub user: UserDto,
}

impl AuthResponse {
    pub fn new(token: AuthTokenDto, user: User) -> Self {
        Self {
            token: token.token,
            expires_at: token.expires_at,
            user: user.into(),
        }
    }
}

/// Facts embedded in an issued token.
#[derive(Debug, Clone)]
pub struct TokenSubject {
    pub user_id: UserId,
    pub name: String,
    pub role: Role,
}

impl From<&User> for TokenSubject {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            name: user.name.to_string(),
            role: user.role,
        }
    }
}

/// Verified contents of a presented token.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub user_id: UserId,
    pub name: String,
    pub role: Role,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// The caller behind a request, re-loaded from the store so role and
/// approval changes apply to tokens that are already out.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: ApprovalStatus,
    pub expires_at: DateTime<Utc>,
}

impl AuthenticatedUser {
    pub fn from_parts(user: &User, claims: &TokenClaims) -> Self {
        Self {
            id: user.id,
            name: user.name.to_string(),
            email: user.email.to_string(),
            role: user.role,
            status: user.status,
            expires_at: claims.expires_at,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
