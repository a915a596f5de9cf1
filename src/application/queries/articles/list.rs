use super::{ArticleListParams, ArticleQueryService};
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        pagination::PageRequest,
        user::{AccessPolicy, UserId},
    },
};

pub struct ListArticlesByAuthorQuery {
    pub user_id: i64,
}

impl ArticleQueryService {
    /// Public listing: published articles matching the filters.
    pub async fn list_articles(
        &self,
        params: ArticleListParams,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let filter = params.public_filter(self.clock.now());
        let page = PageRequest::public(params.page.as_deref(), params.limit.as_deref());
        let records = self.read_repo.list(&filter, page).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    /// Newsroom listing: drafts included, newest first.
    pub async fn list_newsroom(
        &self,
        actor: Option<&AuthenticatedUser>,
        params: ArticleListParams,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        self.gate.check(actor, AccessPolicy::NEWSROOM)?;

        let filter = params.newsroom_filter();
        let page = PageRequest::admin(params.page.as_deref(), params.limit.as_deref());
        let records = self.read_repo.list(&filter, page).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    pub async fn list_by_author(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: ListArticlesByAuthorQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        self.gate.check(actor, AccessPolicy::ADMIN_ONLY)?;

        let author = UserId::new(query.user_id).map_err(ApplicationError::from)?;
        let records = self.read_repo.list_by_creator(author).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}

