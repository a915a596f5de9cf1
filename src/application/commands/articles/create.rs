// src/application/commands/articles/create.rs
use super::{
    ArticleCommandService,
    service::{non_blank, normalize_tags, parse_status},
};
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::{
        article::{
            ArticleBody, ArticleSlug, ArticleTitle, NewArticle, publication_timestamp,
            required_text,
        },
        user::AccessPolicy,
    },
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default)]
pub struct CreateArticleCommand {
    pub title: String,
    pub slug: Option<String>,
    pub category: String,
    pub tags: Vec<String>,
    pub author: String,
    pub excerpt: String,
    pub body: String,
    pub image_url: Option<String>,
    pub source: Option<String>,
    pub status: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        self.gate.check(actor, AccessPolicy::ARTICLE_AUTHORING)?;

        let title = ArticleTitle::new(command.title)?;
        let category = required_text("category", command.category)?;
        let author = required_text("author", command.author)?;
        let excerpt = required_text("excerpt", command.excerpt)?;
        let body = ArticleBody::new(command.body)?;
        let status = parse_status(command.status)?.unwrap_or_default();
        let now = self.clock.now();

        let slug = match non_blank(command.slug) {
            Some(explicit) => {
                let slug = ArticleSlug::new(explicit)?;
                self.slug_service.ensure_available(&slug, None).await?;
                slug
            }
            None => self.slug_service.generate_unique_slug(&title, now).await?,
        };

        let new_article = NewArticle {
            title,
            slug,
            category,
            tags: normalize_tags(command.tags),
            author,
            published_at: publication_timestamp(status, command.published_at, now),
            excerpt,
            body,
            image_url: non_blank(command.image_url),
            source: non_blank(command.source),
            status,
            created_by: actor.map(|a| a.id),
            created_at: now,
        };

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(article_id = %created.id, slug = %created.slug, "article created");
        Ok(created.into())
    }
}
