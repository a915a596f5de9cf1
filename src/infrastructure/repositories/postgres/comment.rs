use crate::domain::article::ArticleId;
use crate::domain::comment::{Comment, CommentId, CommentRepository, CommentText, NewComment};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use crate::infrastructure::repositories::map_sqlx;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    article_id: i64,
    user_id: i64,
    author_name: String,
    text: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.id)?,
            article_id: ArticleId::new(row.article_id)?,
            user_id: UserId::new(row.user_id)?,
            author_name: row.author_name,
            text: CommentText::new(row.text)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let row = sqlx::query_as::<_, CommentRow>(
            "INSERT INTO comments (article_id, user_id, author_name, text, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, article_id, user_id, author_name, text, created_at",
        )
        .bind(i64::from(comment.article_id))
        .bind(i64::from(comment.user_id))
        .bind(comment.author_name)
        .bind(comment.text.as_str())
        .bind(comment.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(
            "SELECT id, article_id, user_id, author_name, text, created_at
             FROM comments WHERE id = $1",
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }

    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            "SELECT id, article_id, user_id, author_name, text, created_at
             FROM comments WHERE article_id = $1
             ORDER BY created_at DESC, id DESC",
        )
        .bind(i64::from(article_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Comment::try_from).collect()
    }

    async fn delete(&self, id: CommentId) -> DomainResult<Comment> {
        let row = sqlx::query_as::<_, CommentRow>(
            "DELETE FROM comments WHERE id = $1
             RETURNING id, article_id, user_id, author_name, text, created_at",
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("comment not found".into()))?;

        Comment::try_from(row)
    }

    async fn delete_by_article(&self, article_id: ArticleId) -> DomainResult<u64> {
        let result = sqlx::query("DELETE FROM comments WHERE article_id = $1")
            .bind(i64::from(article_id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(result.rows_affected())
    }
}
