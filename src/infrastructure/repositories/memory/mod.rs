//! Process-local repositories. Each collection sits behind its own
//! `RwLock`; nothing survives a restart.
mod article;
mod comment;
mod seed;
mod subscriber;
mod user;

pub use article::InMemoryArticleRepository;
pub use comment::InMemoryCommentRepository;
pub use seed::sample_articles;
pub use subscriber::InMemorySubscriberRepository;
pub use user::InMemoryUserRepository;

use crate::application::services::Repositories;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// In-memory backend with the sample articles dated relative to `now`.
pub fn memory_repositories(now: DateTime<Utc>) -> Repositories {
    let articles = Arc::new(InMemoryArticleRepository::seeded(sample_articles(now)));
    Repositories {
        users: Arc::new(InMemoryUserRepository::default()),
        article_reads: articles.clone(),
        article_writes: articles,
        comments: Arc::new(InMemoryCommentRepository::default()),
        subscribers: Arc::new(InMemorySubscriberRepository::default()),
    }
}
