use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::AuthResponse,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        user::{DisplayName, Email, NewUser, PasswordHash, Role, User},
    },
};

pub const EMAIL_ALREADY_REGISTERED: &str = "Email already registered";

pub struct RegisterUserCommand {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Honoured only when role registration is enabled.
    pub role: Option<String>,
}

impl UserCommandService {
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<AuthResponse> {
        let role = self.requested_role(command.role.as_deref())?;
        let user = self
            .create_account(&command.name, &command.email, &command.password, role)
            .await?;
        tracing::info!(user_id = %user.id, role = %user.role, "user registered");
        self.issue_for(user).await
    }

    /// Journalist sign-up: always an editor awaiting review.
    pub async fn register_journalist(
        &self,
        command: RegisterUserCommand,
    ) -> ApplicationResult<AuthResponse> {
        let user = self
            .create_account(&command.name, &command.email, &command.password, Role::Editor)
            .await?;
        tracing::info!(user_id = %user.id, "journalist registered, awaiting approval");
        self.issue_for(user).await
    }

    fn requested_role(&self, requested: Option<&str>) -> ApplicationResult<Role> {
        match requested.map(str::trim).filter(|r| !r.is_empty()) {
            Some(raw) if self.allow_role_registration => raw
                .parse::<Role>()
                .map_err(|_| ApplicationError::validation("Invalid role")),
            _ => Ok(Role::Reader),
        }
    }

    pub(super) async fn create_account(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> ApplicationResult<User> {
        let name = DisplayName::new(name)?;
        let email = Email::new(email)?;
        validate_password(password)?;

        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(ApplicationError::validation(EMAIL_ALREADY_REGISTERED));
        }

        let hashed = self.password_hasher.hash(password).await?;
        let password_hash = PasswordHash::new(hashed)?;
        let new_user = NewUser::new(name, email, password_hash, role, self.clock.now());

        match self.user_repo.insert(new_user).await {
            Ok(user) => Ok(user),
            // Lost a race against a concurrent registration.
            Err(DomainError::Conflict(_)) => {
                Err(ApplicationError::validation(EMAIL_ALREADY_REGISTERED))
            }
            Err(err) => Err(err.into()),
        }
    }
}
