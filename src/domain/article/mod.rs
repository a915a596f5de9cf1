pub mod entity;
pub mod query;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{Article, ArticleUpdate, NewArticle, publication_timestamp};
pub use query::{ArticleFilter, ArticleSort, TRENDING_WINDOW_DAYS, trending_cutoff};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{
    ArticleBody, ArticleId, ArticleKey, ArticleSlug, ArticleStatus, ArticleTitle, required_text,
};
