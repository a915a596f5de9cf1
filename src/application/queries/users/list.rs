use super::UserQueryService;
use crate::{
    application::{
        access::authorize,
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{AccessPolicy, ApprovalStatus, Role},
};

pub struct ListJournalistsQuery {
    pub status: Option<String>,
}

impl UserQueryService {
    /// Journalist accounts, newest first.
    pub async fn list_journalists(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: ListJournalistsQuery,
    ) -> ApplicationResult<Vec<UserDto>> {
        authorize(actor, AccessPolicy::ADMIN_ONLY)?;

        let status = match query.status.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                raw.parse::<ApprovalStatus>()
                    .map_err(|_| ApplicationError::validation(format!("Invalid status '{raw}'")))?,
            ),
        };

        let users = self.user_repo.list_by_role(Role::Editor, status).await?;
        Ok(users.into_iter().map(Into::into).collect())
    }
}
