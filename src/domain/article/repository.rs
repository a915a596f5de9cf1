use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::query::ArticleFilter;
use crate::domain::article::value_objects::{ArticleId, ArticleSlug};
use crate::domain::errors::DomainResult;
use crate::domain::pagination::PageRequest;
use crate::domain::user::UserId;
use async_trait::async_trait;
use std::collections::HashMap;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    /// Removes the article and returns it as it was before deletion.
    async fn delete(&self, id: ArticleId) -> DomainResult<Article>;
    /// Atomically bumps the view counter and returns the updated article.
    async fn increment_views(&self, id: ArticleId) -> DomainResult<Article>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
    async fn list(&self, filter: &ArticleFilter, page: PageRequest) -> DomainResult<Vec<Article>>;
    async fn list_by_creator(&self, creator: UserId) -> DomainResult<Vec<Article>>;
    /// Published article counts keyed by creator. Creators without any
    /// published article are absent from the map.
    async fn count_published_by_creators(
        &self,
        creators: &[UserId],
    ) -> DomainResult<HashMap<UserId, u64>>;
}
