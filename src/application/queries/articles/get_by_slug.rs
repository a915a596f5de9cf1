use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleSlug,
};

pub struct GetArticleBySlugQuery {
    pub slug: String,
    /// Raw `view` query value; only `"1"` counts as a view.
    pub view: Option<String>,
}

impl GetArticleBySlugQuery {
    pub fn records_view(&self) -> bool {
        self.view.as_deref() == Some("1")
    }
}

impl ArticleQueryService {
    pub async fn get_article_by_slug(
        &self,
        query: GetArticleBySlugQuery,
    ) -> ApplicationResult<ArticleDto> {
        let not_found = || ApplicationError::not_found("Not found");
        let slug = ArticleSlug::new(query.slug.as_str()).map_err(|_| not_found())?;
        let article = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(not_found)?;

        if !query.records_view() {
            return Ok(article.into());
        }

        let viewed = self.write_repo.increment_views(article.id).await?;
        Ok(viewed.into())
    }
}
