use crate::domain::article::ArticleId;
use crate::domain::comment::{Comment, CommentId, CommentRepository, NewComment};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use tokio::sync::RwLock;

#[derive(Default)]
struct CommentStore {
    next_id: i64,
    comments: Vec<Comment>,
}

#[derive(Default)]
pub struct InMemoryCommentRepository {
    store: RwLock<CommentStore>,
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut store = self.store.write().await;
        let id = CommentId(store.next_id.max(1));
        store.next_id = id.0 + 1;
        let comment = comment.into_comment(id);
        store.comments.push(comment.clone());
        Ok(comment)
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let store = self.store.read().await;
        Ok(store.comments.iter().find(|c| c.id == id).cloned())
    }

    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>> {
        let store = self.store.read().await;
        let mut comments: Vec<Comment> = store
            .comments
            .iter()
            .filter(|c| c.belongs_to(article_id))
            .cloned()
            .collect();
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));
        Ok(comments)
    }

    async fn delete(&self, id: CommentId) -> DomainResult<Comment> {
        let mut store = self.store.write().await;
        let index = store
            .comments
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))?;
        Ok(store.comments.remove(index))
    }

    async fn delete_by_article(&self, article_id: ArticleId) -> DomainResult<u64> {
        let mut store = self.store.write().await;
        let before = store.comments.len();
        store.comments.retain(|c| !c.belongs_to(article_id));
        Ok(u64::try_from(before - store.comments.len()).unwrap_or(u64::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::comment::CommentText;
    use crate::domain::user::UserId;
    use chrono::Utc;

    fn comment_on(article: i64, text: &str) -> NewComment {
        NewComment {
            article_id: ArticleId(article),
            user_id: UserId(1),
            author_name: "পাঠক".into(),
            text: CommentText::new(text).unwrap(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn deleting_by_article_leaves_other_threads_alone() {
        let repo = InMemoryCommentRepository::default();
        repo.insert(comment_on(1, "প্রথম")).await.unwrap();
        repo.insert(comment_on(2, "অন্য খবর")).await.unwrap();
        repo.insert(comment_on(1, "দ্বিতীয়")).await.unwrap();

        assert_eq!(repo.delete_by_article(ArticleId(1)).await.unwrap(), 2);
        assert!(repo.list_by_article(ArticleId(1)).await.unwrap().is_empty());
        assert_eq!(repo.list_by_article(ArticleId(2)).await.unwrap().len(), 1);
        assert_eq!(repo.delete_by_article(ArticleId(1)).await.unwrap(), 0);
    }
}
