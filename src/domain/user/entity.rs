// src/domain/user/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::value_objects::{
    ApprovalStatus, DisplayName, Email, PasswordHash, Role, UserId,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: DisplayName,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub role: Role,
    pub status: ApprovalStatus,
    pub created_at: DateTime<Utc>,
}

/// Admin decision on a pending journalist account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    Approve,
    Reject,
}

impl ReviewDecision {
    pub fn target(&self) -> ApprovalStatus {
        match self {
            ReviewDecision::Approve => ApprovalStatus::Approved,
            ReviewDecision::Reject => ApprovalStatus::Rejected,
        }
    }
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn is_approved(&self) -> bool {
        self.status == ApprovalStatus::Approved
    }

    /// Applies a review decision. Returns `true` when the status changed.
    ///
    /// Only editors are reviewable. `pending` moves to either outcome;
    /// approved and rejected accounts are final, though repeating the
    /// decision they already carry is accepted as a no-op.
    pub fn review(&mut self, decision: ReviewDecision) -> DomainResult<bool> {
        if self.role != Role::Editor {
            return Err(DomainError::NotFound("journalist not found".into()));
        }
        let target = decision.target();
        match self.status {
            current if current == target => Ok(false),
            ApprovalStatus::Pending => {
                self.status = target;
                Ok(true)
            }
            current => Err(DomainError::Conflict(format!(
                "journalist is already {current}"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: DisplayName,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub role: Role,
    pub status: ApprovalStatus,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(
        name: DisplayName,
        email: Email,
        password_hash: PasswordHash,
        role: Role,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name,
            email,
            password_hash,
            role,
            status: ApprovalStatus::initial_for(role),
            created_at,
        }
    }

    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
            role: self.role,
            status: self.status,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub id: UserId,
    pub status: Option<ApprovalStatus>,
}

impl UserUpdate {
    pub fn new(id: UserId) -> Self {
        Self { id, status: None }
    }

    pub fn with_status(mut self, status: ApprovalStatus) -> Self {
        self.status = Some(status);
        self
    }
}
