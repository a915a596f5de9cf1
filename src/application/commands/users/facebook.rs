use super::UserCommandService;
use crate::{
    application::{dto::AuthResponse, error::ApplicationResult},
    domain::user::{Email, Role},
};

/// Password stored for accounts provisioned through the mock login.
const MOCK_PASSWORD: &str = "facebook_mock_password";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FacebookAccountType {
    Admin,
    Journalist,
    #[default]
    Reader,
}

impl FacebookAccountType {
    /// Unknown values fall back to a reader account.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("admin") => FacebookAccountType::Admin,
            Some("journalist") => FacebookAccountType::Journalist,
            _ => FacebookAccountType::Reader,
        }
    }

    pub fn role(&self) -> Role {
        match self {
            FacebookAccountType::Admin => Role::Admin,
            FacebookAccountType::Journalist => Role::Editor,
            FacebookAccountType::Reader => Role::Reader,
        }
    }
}

pub struct FacebookMockCommand {
    pub account_type: FacebookAccountType,
    pub email: Option<String>,
    pub name: Option<String>,
}

impl UserCommandService {
    /// Stand-in for a social login: finds the account by email or provisions
    /// one with the requested role.
    pub async fn facebook_mock(
        &self,
        command: FacebookMockCommand,
    ) -> ApplicationResult<AuthResponse> {
        let role = command.account_type.role();
        let now = self.clock.now();
        let email = command
            .email
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| format!("fb_{}_{}@mock.local", role, now.timestamp_millis()));
        let name = command
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| format!("Facebook {role}"));

        let existing = self.user_repo.find_by_email(&Email::new(email.as_str())?).await?;
        let user = match existing {
            Some(user) => user,
            None => {
                let user = self.create_account(&name, &email, MOCK_PASSWORD, role).await?;
                tracing::info!(user_id = %user.id, role = %user.role, "mock social account provisioned");
                user
            }
        };
        self.issue_for(user).await
    }
}
