use crate::domain::article::{
    Article, ArticleFilter, ArticleId, ArticleReadRepository, ArticleSlug, ArticleUpdate,
    ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::PageRequest;
use crate::domain::user::UserId;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct ArticleStore {
    next_id: i64,
    articles: Vec<Article>,
}

impl ArticleStore {
    fn position(&self, id: ArticleId) -> DomainResult<usize> {
        self.articles
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }

    fn slug_taken(&self, slug: &ArticleSlug, except: Option<ArticleId>) -> bool {
        self.articles
            .iter()
            .any(|a| &a.slug == slug && Some(a.id) != except)
    }
}

/// Serves both the read and write article ports from one collection.
#[derive(Default)]
pub struct InMemoryArticleRepository {
    store: RwLock<ArticleStore>,
}

impl InMemoryArticleRepository {
    /// Ids continue after the highest seeded id.
    pub fn seeded(articles: Vec<Article>) -> Self {
        let next_id = articles.iter().map(|a| a.id.0).max().unwrap_or(0) + 1;
        Self {
            store: RwLock::new(ArticleStore { next_id, articles }),
        }
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut store = self.store.write().await;
        if store.slug_taken(&article.slug, None) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        let id = ArticleId(store.next_id.max(1));
        store.next_id = id.0 + 1;
        let article = article.into_article(id);
        store.articles.push(article.clone());
        Ok(article)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut store = self.store.write().await;
        let index = store.position(update.id)?;
        if let Some(slug) = &update.slug {
            if store.slug_taken(slug, Some(update.id)) {
                return Err(DomainError::Conflict("slug already exists".into()));
            }
        }
        let article = &mut store.articles[index];
        article.apply(update)?;
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<Article> {
        let mut store = self.store.write().await;
        let index = store.position(id)?;
        Ok(store.articles.remove(index))
    }

    async fn increment_views(&self, id: ArticleId) -> DomainResult<Article> {
        let mut store = self.store.write().await;
        let index = store.position(id)?;
        let article = &mut store.articles[index];
        article.record_view();
        Ok(article.clone())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let store = self.store.read().await;
        Ok(store.articles.iter().find(|a| a.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let store = self.store.read().await;
        Ok(store.articles.iter().find(|a| &a.slug == slug).cloned())
    }

    async fn list(&self, filter: &ArticleFilter, page: PageRequest) -> DomainResult<Vec<Article>> {
        let mut matched: Vec<Article> = {
            let store = self.store.read().await;
            store
                .articles
                .iter()
                .filter(|a| filter.matches(a))
                .cloned()
                .collect()
        };
        matched.sort_by(|a, b| filter.sort.compare(a, b));
        Ok(page.slice(matched))
    }

    async fn list_by_creator(&self, creator: UserId) -> DomainResult<Vec<Article>> {
        let store = self.store.read().await;
        let mut items: Vec<Article> = store
            .articles
            .iter()
            .filter(|a| a.created_by == Some(creator))
            .cloned()
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));
        Ok(items)
    }

    async fn count_published_by_creators(
        &self,
        creators: &[UserId],
    ) -> DomainResult<HashMap<UserId, u64>> {
        let store = self.store.read().await;
        let mut counts = HashMap::new();
        for article in store.articles.iter().filter(|a| a.is_published()) {
            if let Some(creator) = article.created_by.filter(|c| creators.contains(c)) {
                *counts.entry(creator).or_insert(0) += 1;
            }
        }
        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::ArticleSort;
    use crate::infrastructure::repositories::memory::sample_articles;
    use chrono::Utc;

    fn repo() -> InMemoryArticleRepository {
        InMemoryArticleRepository::seeded(sample_articles(Utc::now()))
    }

    #[tokio::test]
    async fn concurrent_view_increments_are_not_lost() {
        let repo = std::sync::Arc::new(repo());
        let slug = ArticleSlug::new("sample-1").unwrap();
        let before = repo.find_by_slug(&slug).await.unwrap().unwrap();

        let mut handles = Vec::new();
        for _ in 0..20 {
            let repo = repo.clone();
            let id = before.id;
            handles.push(tokio::spawn(async move { repo.increment_views(id).await }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let after = repo.find_by_slug(&slug).await.unwrap().unwrap();
        assert_eq!(after.views, before.views + 20);
    }

    #[tokio::test]
    async fn list_sorts_and_pages() {
        let repo = repo();
        let filter = ArticleFilter::public().with_sort(ArticleSort::Views);
        let first = repo
            .list(&filter, PageRequest::public(Some("1"), Some("2")))
            .await
            .unwrap();
        assert_eq!(first.len(), 2);
        assert!(first[0].views >= first[1].views);

        let rest = repo
            .list(&filter, PageRequest::public(Some("2"), Some("2")))
            .await
            .unwrap();
        assert!(rest.iter().all(|a| a.views <= first[1].views));
    }

    #[tokio::test]
    async fn delete_returns_removed_article() {
        let repo = repo();
        let slug = ArticleSlug::new("sample-2").unwrap();
        let article = repo.find_by_slug(&slug).await.unwrap().unwrap();
        let removed = repo.delete(article.id).await.unwrap();
        assert_eq!(removed.slug, slug);
        assert!(repo.find_by_slug(&slug).await.unwrap().is_none());
        assert!(matches!(
            repo.delete(article.id).await,
            Err(DomainError::NotFound(_))
        ));
    }
}
