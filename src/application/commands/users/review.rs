use super::UserCommandService;
use crate::{
    application::{
        access::authorize,
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        user::{AccessPolicy, ReviewDecision, UserId, UserUpdate},
    },
};

pub struct ReviewJournalistCommand {
    pub user_id: i64,
    pub decision: ReviewDecision,
}

impl UserCommandService {
    pub async fn review_journalist(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: ReviewJournalistCommand,
    ) -> ApplicationResult<UserDto> {
        let reviewer = authorize(actor, AccessPolicy::ADMIN_ONLY)?;

        let not_found = || ApplicationError::not_found("Not found");
        let user_id = UserId::new(command.user_id).map_err(|_| not_found())?;
        let mut user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(not_found)?;

        let changed = match user.review(command.decision) {
            Ok(changed) => changed,
            Err(DomainError::NotFound(_)) => return Err(not_found()),
            Err(err) => return Err(err.into()),
        };
        if !changed {
            return Ok(user.into());
        }

        let updated = self
            .user_repo
            .update(UserUpdate::new(user.id).with_status(user.status))
            .await?;
        tracing::info!(
            user_id = %updated.id,
            reviewer_id = %reviewer.id,
            status = %updated.status,
            "journalist reviewed"
        );
        Ok(updated.into())
    }
}
