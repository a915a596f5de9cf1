// src/application/commands/comments.rs
use std::sync::Arc;

use crate::{
    application::{
        access::{FORBIDDEN, authorize_any},
        dto::{AuthenticatedUser, CommentDto, Removed},
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        article::{Article, ArticleReadRepository, ArticleSlug},
        comment::{CommentId, CommentRepository, CommentText, NewComment},
    },
};

pub struct AddCommentCommand {
    pub slug: String,
    pub text: String,
}

pub struct DeleteCommentCommand {
    pub slug: String,
    pub comment_id: i64,
}

pub struct CommentCommandService {
    comment_repo: Arc<dyn CommentRepository>,
    article_repo: Arc<dyn ArticleReadRepository>,
    clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        article_repo: Arc<dyn ArticleReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            comment_repo,
            article_repo,
            clock,
        }
    }

    async fn article(&self, slug: String) -> ApplicationResult<Article> {
        let not_found = || ApplicationError::not_found("Article not found");
        let slug = ArticleSlug::new(slug).map_err(|_| not_found())?;
        self.article_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn add_comment(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: AddCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let actor = authorize_any(actor)?;
        let text = CommentText::new(command.text)?;
        let article = self.article(command.slug).await?;

        let comment = self
            .comment_repo
            .insert(NewComment {
                article_id: article.id,
                user_id: actor.id,
                author_name: actor.name.clone(),
                text,
                created_at: self.clock.now(),
            })
            .await?;
        tracing::debug!(comment_id = %comment.id, article_id = %article.id, "comment added");
        Ok(comment.into())
    }

    /// Authors may remove their own comments; admins may remove any.
    pub async fn delete_comment(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: DeleteCommentCommand,
    ) -> ApplicationResult<Removed<CommentDto>> {
        let actor = authorize_any(actor)?;
        let article = self.article(command.slug).await?;

        let not_found = || ApplicationError::not_found("Not found");
        let comment_id = CommentId::new(command.comment_id).map_err(|_| not_found())?;
        let comment = self
            .comment_repo
            .find_by_id(comment_id)
            .await?
            .filter(|comment| comment.belongs_to(article.id))
            .ok_or_else(not_found)?;

        if !actor.is_admin() && comment.user_id != actor.id {
            return Err(ApplicationError::forbidden(FORBIDDEN));
        }

        let removed = self.comment_repo.delete(comment.id).await?;
        Ok(Removed::new(removed.into()))
    }
}
