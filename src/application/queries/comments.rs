// src/application/queries/comments.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleReadRepository, ArticleSlug},
        comment::CommentRepository,
    },
};

pub struct ListCommentsQuery {
    pub slug: String,
}

pub struct CommentQueryService {
    comment_repo: Arc<dyn CommentRepository>,
    article_repo: Arc<dyn ArticleReadRepository>,
}

impl CommentQueryService {
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        article_repo: Arc<dyn ArticleReadRepository>,
    ) -> Self {
        Self {
            comment_repo,
            article_repo,
        }
    }

    /// Comments on one article, newest first.
    pub async fn list_comments(&self, query: ListCommentsQuery) -> ApplicationResult<Vec<CommentDto>> {
        let not_found = || ApplicationError::not_found("Article not found");
        let slug = ArticleSlug::new(query.slug).map_err(|_| not_found())?;
        let article = self
            .article_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(not_found)?;

        let comments = self.comment_repo.list_by_article(article.id).await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }
}
