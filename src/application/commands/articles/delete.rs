// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser, Removed},
        error::ApplicationResult,
    },
    domain::user::AccessPolicy,
};

pub struct DeleteArticleCommand {
    /// Numeric id or slug.
    pub key: String,
}

impl ArticleCommandService {
    pub async fn delete_article(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<Removed<ArticleDto>> {
        self.gate.check(actor, AccessPolicy::ADMIN_ONLY)?;

        let article = self.resolve(&command.key).await?;
        let removed = self.write_repo.delete(article.id).await?;
        let comments = self.comment_repo.delete_by_article(removed.id).await?;
        tracing::info!(
            article_id = %removed.id,
            slug = %removed.slug,
            comments,
            "article deleted"
        );
        Ok(Removed::new(removed.into()))
    }
}
