// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleBody, ArticleId, ArticleSlug, ArticleStatus, ArticleTitle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub category: String,
    pub tags: Vec<String>,
    pub author: String,
    pub published_at: Option<DateTime<Utc>>,
    pub excerpt: String,
    pub body: ArticleBody,
    pub image_url: Option<String>,
    pub source: Option<String>,
    pub views: u64,
    pub status: ArticleStatus,
    pub created_by: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// `published_at` is stamped exactly once: on the first time the article is
/// published and only when no timestamp was supplied.
pub fn publication_timestamp(
    status: ArticleStatus,
    current: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    match (status, current) {
        (ArticleStatus::Published, None) => Some(now),
        (_, current) => current,
    }
}

impl Article {
    pub fn is_published(&self) -> bool {
        self.status == ArticleStatus::Published
    }

    pub fn publish(&mut self, now: DateTime<Utc>) {
        self.status = ArticleStatus::Published;
        self.published_at = publication_timestamp(self.status, self.published_at, now);
        self.updated_at = now;
    }

    pub fn record_view(&mut self) {
        self.views = self.views.saturating_add(1);
    }

    /// Applies a partial update in place. Used by the in-memory store; the SQL
    /// store performs the same assignment in its `UPDATE` statement.
    pub fn apply(&mut self, update: ArticleUpdate) -> DomainResult<()> {
        if update.id != self.id {
            return Err(DomainError::Validation("article id mismatch".into()));
        }
        if update.original_updated_at != self.updated_at {
            return Err(DomainError::Conflict(
                "article update conflict, please retry".into(),
            ));
        }

        let ArticleUpdate {
            title,
            slug,
            category,
            tags,
            author,
            excerpt,
            body,
            image_url,
            source,
            status,
            published_at,
            updated_at,
            ..
        } = update;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(slug) = slug {
            self.slug = slug;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(tags) = tags {
            self.tags = tags;
        }
        if let Some(author) = author {
            self.author = author;
        }
        if let Some(excerpt) = excerpt {
            self.excerpt = excerpt;
        }
        if let Some(body) = body {
            self.body = body;
        }
        if let Some(image_url) = image_url {
            self.image_url = Some(image_url);
        }
        if let Some(source) = source {
            self.source = Some(source);
        }
        if let Some(status) = status {
            self.status = status;
        }
        if let Some(published_at) = published_at {
            self.published_at = Some(published_at);
        }
        self.updated_at = updated_at;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub category: String,
    pub tags: Vec<String>,
    pub author: String,
    pub published_at: Option<DateTime<Utc>>,
    pub excerpt: String,
    pub body: ArticleBody,
    pub image_url: Option<String>,
    pub source: Option<String>,
    pub status: ArticleStatus,
    pub created_by: Option<UserId>,
    pub created_at: DateTime<Utc>,
}

impl NewArticle {
    pub fn into_article(self, id: ArticleId) -> Article {
        Article {
            id,
            title: self.title,
            slug: self.slug,
            category: self.category,
            tags: self.tags,
            author: self.author,
            published_at: self.published_at,
            excerpt: self.excerpt,
            body: self.body,
            image_url: self.image_url,
            source: self.source,
            views: 0,
            status: self.status,
            created_by: self.created_by,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub slug: Option<ArticleSlug>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub author: Option<String>,
    pub excerpt: Option<String>,
    pub body: Option<ArticleBody>,
    pub image_url: Option<String>,
    pub source: Option<String>,
    pub status: Option<ArticleStatus>,
    pub published_at: Option<DateTime<Utc>>,
    pub original_updated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, original_updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            category: None,
            tags: None,
            author: None,
            excerpt: None,
            body: None,
            image_url: None,
            source: None,
            status: None,
            published_at: None,
            original_updated_at,
            updated_at: original_updated_at,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: ArticleSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_category(mut self, category: String) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn with_author(mut self, author: String) -> Self {
        self.author = Some(author);
        self
    }

    pub fn with_excerpt(mut self, excerpt: String) -> Self {
        self.excerpt = Some(excerpt);
        self
    }

    pub fn with_body(mut self, body: ArticleBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_image_url(mut self, image_url: String) -> Self {
        self.image_url = Some(image_url);
        self
    }

    pub fn with_source(mut self, source: String) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_status(mut self, status: ArticleStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.published_at = Some(published_at);
        self
    }

    pub fn set_updated_at(&mut self, updated_at: DateTime<Utc>) {
        self.updated_at = updated_at;
    }
}
