mod article;
mod comment;
mod subscriber;
mod user;

pub use article::{PostgresArticleReadRepository, PostgresArticleWriteRepository};
pub use comment::PostgresCommentRepository;
pub use subscriber::PostgresSubscriberRepository;
pub use user::PostgresUserRepository;

use crate::application::services::Repositories;
use sqlx::PgPool;
use std::sync::Arc;

pub fn postgres_repositories(pool: PgPool) -> Repositories {
    Repositories {
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        article_reads: Arc::new(PostgresArticleReadRepository::new(pool.clone())),
        article_writes: Arc::new(PostgresArticleWriteRepository::new(pool.clone())),
        comments: Arc::new(PostgresCommentRepository::new(pool.clone())),
        subscribers: Arc::new(PostgresSubscriberRepository::new(pool)),
    }
}
