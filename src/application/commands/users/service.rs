use std::sync::Arc;

use crate::application::{
    dto::{AuthResponse, TokenSubject},
    error::ApplicationResult,
    ports::{
        security::{PasswordHasher, TokenManager},
        time::Clock,
    },
};
use crate::domain::user::{User, UserRepository};

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_manager: Arc<dyn TokenManager>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) allow_role_registration: bool,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
        allow_role_registration: bool,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            token_manager,
            clock,
            allow_role_registration,
        }
    }

    pub(super) async fn issue_for(&self, user: User) -> ApplicationResult<AuthResponse> {
        let token = self.token_manager.issue(TokenSubject::from(&user)).await?;
        Ok(AuthResponse::new(token, user))
    }
}
