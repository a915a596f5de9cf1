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
            ArticleBody, ArticleSlug, ArticleStatus, ArticleTitle, ArticleUpdate,
            publication_timestamp, required_text,
        },
        user::AccessPolicy,
    },
};
use chrono::{DateTime, Utc};

/// Partial update; `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateArticleCommand {
    /// Numeric id or slug.
    pub key: String,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub author: Option<String>,
    pub excerpt: Option<String>,
    pub body: Option<String>,
    pub image_url: Option<String>,
    pub source: Option<String>,
    pub status: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        self.gate.check(actor, AccessPolicy::ARTICLE_AUTHORING)?;

        let article = self.resolve(&command.key).await?;
        let UpdateArticleCommand {
            key: _,
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
        } = command;

        let mut update = ArticleUpdate::new(article.id, article.updated_at);

        if let Some(title) = title {
            update = update.with_title(ArticleTitle::new(title)?);
        }
        if let Some(excerpt) = excerpt {
            update = update.with_excerpt(required_text("excerpt", excerpt)?);
        }
        if let Some(body) = body {
            update = update.with_body(ArticleBody::new(body)?);
        }
        if let Some(category) = non_blank(category) {
            update = update.with_category(category);
        }
        if let Some(author) = non_blank(author) {
            update = update.with_author(author);
        }
        if let Some(tags) = tags {
            update = update.with_tags(normalize_tags(tags));
        }
        if let Some(image_url) = non_blank(image_url) {
            update = update.with_image_url(image_url);
        }
        if let Some(source) = non_blank(source) {
            update = update.with_source(source);
        }

        if let Some(slug) = non_blank(slug) {
            let slug = ArticleSlug::new(slug)?;
            if slug != article.slug {
                self.slug_service
                    .ensure_available(&slug, Some(article.id))
                    .await?;
                update = update.with_slug(slug);
            }
        }

        let now = self.clock.now();
        let next_status = parse_status(status)?;
        let effective_status = next_status.unwrap_or(article.status);
        let stamped = publication_timestamp(
            effective_status,
            published_at.or(article.published_at),
            now,
        );
        if let Some(status) = next_status {
            update = update.with_status(status);
        }
        if stamped != article.published_at {
            if let Some(stamp) = stamped {
                update = update.with_published_at(stamp);
            }
        }
        update.set_updated_at(now);

        let updated = self.write_repo.update(update).await?;
        if article.status != ArticleStatus::Published && updated.is_published() {
            tracing::info!(article_id = %updated.id, "article published");
        }
        Ok(updated.into())
    }
}
