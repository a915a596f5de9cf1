use crate::domain::comment::Comment;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: i64,
    pub author_name: String,
    pub text: String,
    #[serde(serialize_with = "serde_time::rfc3339")]
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.0,
            author_name: comment.author_name,
            text: comment.text.as_str().to_string(),
            created_at: comment.created_at,
        }
    }
}
