use super::UserQueryService;
use crate::application::{
    access::{AUTHORIZATION_REQUIRED, authorize_any},
    dto::{AuthenticatedUser, UserDto},
    error::{ApplicationError, ApplicationResult},
};

impl UserQueryService {
    pub async fn get_profile(
        &self,
        actor: Option<&AuthenticatedUser>,
    ) -> ApplicationResult<UserDto> {
        let actor = authorize_any(actor)?;
        let user = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized(AUTHORIZATION_REQUIRED))?;

        Ok(user.into())
    }
}
