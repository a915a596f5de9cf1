use super::UserCommandService;
use crate::{
    application::{
        dto::AuthResponse,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, Role},
};

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const JOURNALIST_ACCESS_REQUIRED: &str = "Journalist access required";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginAudience {
    Reader,
    /// Newsroom login: editors and admins only.
    Journalist,
}

pub struct LoginUserCommand {
    pub email: String,
    pub password: String,
    pub audience: LoginAudience,
}

impl UserCommandService {
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<AuthResponse> {
        let email =
            Email::new(command.email).map_err(|_| ApplicationError::validation(INVALID_CREDENTIALS))?;
        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| ApplicationError::validation(INVALID_CREDENTIALS))?;

        let verified = self
            .password_hasher
            .verify(&command.password, user.password_hash.as_str())
            .await?;
        if !verified {
            tracing::debug!(user_id = %user.id, "password mismatch");
            return Err(ApplicationError::validation(INVALID_CREDENTIALS));
        }

        if command.audience == LoginAudience::Journalist
            && !matches!(user.role, Role::Editor | Role::Admin)
        {
            return Err(ApplicationError::forbidden(JOURNALIST_ACCESS_REQUIRED));
        }

        self.issue_for(user).await
    }
}
