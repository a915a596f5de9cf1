// src/domain/article/services/mod.rs
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::ports::util::SlugGenerator;
use crate::domain::article::repository::ArticleReadRepository;
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, ArticleTitle};
use crate::domain::errors::{DomainError, DomainResult};

const FALLBACK_SLUG: &str = "article";

/// Domain service responsible for producing unique slugs for articles.
pub struct ArticleSlugService {
    read_repo: Arc<dyn ArticleReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl ArticleSlugService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    /// Derives `<slugified title>-<unix millis>` and appends `-1`, `-2`, ...
    /// until no other article uses it.
    pub async fn generate_unique_slug(
        &self,
        title: &ArticleTitle,
        now: DateTime<Utc>,
    ) -> DomainResult<ArticleSlug> {
        let base = self.generator.slugify(title.as_str());
        let base = if base.is_empty() {
            FALLBACK_SLUG.to_string()
        } else {
            base
        };
        let base_slug = format!("{}-{}", base, now.timestamp_millis());

        let mut candidate = base_slug.clone();
        let mut counter = 1u64;

        loop {
            let slug = ArticleSlug::new(candidate.clone())?;
            match self.read_repo.find_by_slug(&slug).await? {
                Some(_) => {
                    candidate = format!("{}-{}", base_slug, counter);
                    counter += 1;
                }
                None => return Ok(slug),
            }
        }
    }

    /// Fails with a conflict when another article already owns `slug`.
    pub async fn ensure_available(
        &self,
        slug: &ArticleSlug,
        ignore_id: Option<ArticleId>,
    ) -> DomainResult<()> {
        match self.read_repo.find_by_slug(slug).await? {
            Some(existing) if Some(existing.id) != ignore_id => Err(DomainError::Conflict(
                format!("slug '{}' is already in use", slug),
            )),
            _ => Ok(()),
        }
    }
}
