use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub category: String,
    pub tags: Vec<String>,
    pub author: String,
    #[serde(serialize_with = "serde_time::rfc3339_opt")]
    pub published_at: Option<DateTime<Utc>>,
    pub excerpt: String,
    pub body: String,
    pub image_url: Option<String>,
    pub source: Option<String>,
    pub views: u64,
    /// `draft` or `published`.
    pub status: String,
    pub created_by: Option<i64>,
    #[serde(serialize_with = "serde_time::rfc3339")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "serde_time::rfc3339")]
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            slug: article.slug.into_inner(),
            category: article.category,
            tags: article.tags,
            author: article.author,
            published_at: article.published_at,
            excerpt: article.excerpt,
            body: article.body.into_inner(),
            image_url: article.image_url,
            source: article.source,
            views: article.views,
            status: article.status.as_str().to_string(),
            created_by: article.created_by.map(Into::into),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

/// Wrapper returned by delete endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct Removed<T> {
    pub removed: T,
}

impl<T> Removed<T> {
    pub fn new(removed: T) -> Self {
        Self { removed }
    }
}
