use crate::domain::errors::DomainResult;
use crate::domain::user::entity::{NewUser, User, UserUpdate};
use crate::domain::user::value_objects::{ApprovalStatus, Email, Role, UserId};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fails with a conflict when the email is already registered.
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn update(&self, update: UserUpdate) -> DomainResult<User>;

    /// Users holding `role`, newest first, optionally restricted to one
    /// approval status.
    async fn list_by_role(
        &self,
        role: Role,
        status: Option<ApprovalStatus>,
    ) -> DomainResult<Vec<User>>;
}
