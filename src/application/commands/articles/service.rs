// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        access::ArticleGate,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        article::{
            Article, ArticleKey, ArticleReadRepository, ArticleSlug, ArticleStatus,
            ArticleWriteRepository, services::ArticleSlugService,
        },
        comment::CommentRepository,
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) slug_service: Arc<ArticleSlugService>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) gate: ArticleGate,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        slug_service: Arc<ArticleSlugService>,
        clock: Arc<dyn Clock>,
        gate: ArticleGate,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            comment_repo,
            slug_service,
            clock,
            gate,
        }
    }

    /// Looks an article up by numeric id or slug. A numeric key that names
    /// no id is retried as a slug, since slugs may be all digits.
    pub(super) async fn resolve(&self, key: &str) -> ApplicationResult<Article> {
        let found = match ArticleKey::parse(key)? {
            ArticleKey::Id(id) => match self.read_repo.find_by_id(id).await? {
                Some(article) => Some(article),
                None => {
                    let slug = ArticleSlug::new(key.trim())?;
                    self.read_repo.find_by_slug(&slug).await?
                }
            },
            ArticleKey::Slug(slug) => self.read_repo.find_by_slug(&slug).await?,
        };
        found.ok_or_else(|| ApplicationError::not_found("Article not found"))
    }
}

pub(super) fn parse_status(raw: Option<String>) -> ApplicationResult<Option<ArticleStatus>> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .to_ascii_lowercase()
            .parse::<ArticleStatus>()
            .map(Some)
            .map_err(ApplicationError::from),
    }
}

/// Trims tags, drops blanks and repeats while keeping first-seen order.
pub(super) fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if !tag.is_empty() && !seen.iter().any(|t: &String| t == tag) {
            seen.push(tag.to_string());
        }
    }
    seen
}

pub(super) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
