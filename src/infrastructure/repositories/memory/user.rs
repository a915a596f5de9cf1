use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{
    ApprovalStatus, Email, NewUser, Role, User, UserId, UserRepository, UserUpdate,
};
use async_trait::async_trait;
use tokio::sync::RwLock;

#[derive(Default)]
struct UserStore {
    next_id: i64,
    users: Vec<User>,
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    store: RwLock<UserStore>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut store = self.store.write().await;
        if store.users.iter().any(|u| u.email == new_user.email) {
            return Err(DomainError::Conflict("email already registered".into()));
        }
        let id = UserId(store.next_id.max(1));
        store.next_id = id.0 + 1;
        let user = new_user.into_user(id);
        store.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let store = self.store.read().await;
        Ok(store.users.iter().find(|u| &u.email == email).cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let store = self.store.read().await;
        Ok(store.users.iter().find(|u| u.id == id).cloned())
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let mut store = self.store.write().await;
        let user = store
            .users
            .iter_mut()
            .find(|u| u.id == update.id)
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        if let Some(status) = update.status {
            user.status = status;
        }
        Ok(user.clone())
    }

    async fn list_by_role(
        &self,
        role: Role,
        status: Option<ApprovalStatus>,
    ) -> DomainResult<Vec<User>> {
        let store = self.store.read().await;
        let mut users: Vec<User> = store
            .users
            .iter()
            .filter(|u| u.role == role && status.is_none_or(|s| u.status == s))
            .cloned()
            .collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));
        Ok(users)
    }
}
