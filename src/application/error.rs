// src/application/error.rs
use crate::application::access::{APPROVAL_REQUIRED, FORBIDDEN};
use crate::domain::{errors::DomainError, user::AccessDenied};
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Failures surfaced by the command and query services. The payload of the
/// client-facing variants is the exact message returned to the caller.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    /// Reserved for service-level clashes; store-level ones arrive as
    /// [`DomainError::Conflict`].
    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    /// Hasher, token or store plumbing failed. Never shown to clients.
    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }
}

impl From<AccessDenied> for ApplicationError {
    fn from(denied: AccessDenied) -> Self {
        match denied {
            AccessDenied::RoleNotPermitted => Self::forbidden(FORBIDDEN),
            AccessDenied::ApprovalRequired => Self::forbidden(APPROVAL_REQUIRED),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_messages_display_verbatim() {
        assert_eq!(
            ApplicationError::validation("Password too short").to_string(),
            "Password too short"
        );
        assert_eq!(
            ApplicationError::infrastructure("pool closed").to_string(),
            "infrastructure failure: pool closed"
        );
    }

    #[test]
    fn denied_access_maps_to_forbidden_messages() {
        let err = ApplicationError::from(AccessDenied::ApprovalRequired);
        assert!(matches!(err, ApplicationError::Forbidden(msg) if msg == APPROVAL_REQUIRED));
        let err = ApplicationError::from(AccessDenied::RoleNotPermitted);
        assert!(matches!(err, ApplicationError::Forbidden(msg) if msg == FORBIDDEN));
    }
}
