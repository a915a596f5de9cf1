// src/domain/comment.rs
use crate::domain::article::{ArticleId, required_text};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommentId(pub i64);

impl CommentId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("comment id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentText(String);

impl CommentText {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        required_text("text", value).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub article_id: ArticleId,
    pub user_id: UserId,
    /// Copied from the user at posting time.
    pub author_name: String,
    pub text: CommentText,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn belongs_to(&self, article_id: ArticleId) -> bool {
        self.article_id == article_id
    }
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub article_id: ArticleId,
    pub user_id: UserId,
    pub author_name: String,
    pub text: CommentText,
    pub created_at: DateTime<Utc>,
}

impl NewComment {
    pub fn into_comment(self, id: CommentId) -> Comment {
        Comment {
            id,
            article_id: self.article_id,
            user_id: self.user_id,
            author_name: self.author_name,
            text: self.text,
            created_at: self.created_at,
        }
    }
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>>;
    /// Newest first.
    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>>;
    async fn delete(&self, id: CommentId) -> DomainResult<Comment>;
    /// Removes every comment on the article; returns how many went.
    async fn delete_by_article(&self, article_id: ArticleId) -> DomainResult<u64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_must_not_be_blank() {
        assert!(CommentText::new("  \n ").is_err());
        assert_eq!(CommentText::new(" ভালো লেখা ").unwrap().as_str(), "ভালো লেখা");
    }
}
