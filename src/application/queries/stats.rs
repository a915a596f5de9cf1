// src/application/queries/stats.rs
use std::sync::Arc;

use crate::{
    application::{
        access::{authorize, authorize_any},
        dto::{AuthenticatedUser, JournalistScoreDto, ScoreDto},
        error::ApplicationResult,
    },
    domain::{
        article::ArticleReadRepository,
        user::{AccessPolicy, ApprovalStatus, Role, UserRepository},
    },
};

/// A journalist's score is the number of published articles they created.
pub struct StatsQueryService {
    article_repo: Arc<dyn ArticleReadRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl StatsQueryService {
    pub fn new(
        article_repo: Arc<dyn ArticleReadRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            article_repo,
            user_repo,
        }
    }

    pub async fn my_score(&self, actor: Option<&AuthenticatedUser>) -> ApplicationResult<ScoreDto> {
        let actor = authorize_any(actor)?;
        let counts = self
            .article_repo
            .count_published_by_creators(&[actor.id])
            .await?;
        Ok(ScoreDto {
            score: counts.get(&actor.id).copied().unwrap_or(0),
        })
    }

    /// Approved journalists with their scores, in listing order.
    pub async fn journalist_scores(
        &self,
        actor: Option<&AuthenticatedUser>,
    ) -> ApplicationResult<Vec<JournalistScoreDto>> {
        authorize(actor, AccessPolicy::ADMIN_ONLY)?;

        let journalists = self
            .user_repo
            .list_by_role(Role::Editor, Some(ApprovalStatus::Approved))
            .await?;
        let ids: Vec<_> = journalists.iter().map(|user| user.id).collect();
        let counts = self.article_repo.count_published_by_creators(&ids).await?;

        Ok(journalists
            .into_iter()
            .map(|user| JournalistScoreDto {
                id: user.id.into(),
                score: counts.get(&user.id).copied().unwrap_or(0),
                name: user.name.into(),
                email: user.email.into(),
            })
            .collect())
    }
}
