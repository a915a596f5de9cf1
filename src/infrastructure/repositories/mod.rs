// src/infrastructure/repositories/mod.rs
mod error;
pub mod memory;
pub mod postgres;

pub use error::map_sqlx;
pub use memory::{
    InMemoryArticleRepository, InMemoryCommentRepository, InMemorySubscriberRepository,
    InMemoryUserRepository, memory_repositories,
};
pub use postgres::{
    PostgresArticleReadRepository, PostgresArticleWriteRepository, PostgresCommentRepository,
    PostgresSubscriberRepository, PostgresUserRepository, postgres_repositories,
};
