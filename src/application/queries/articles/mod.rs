mod get_by_slug;
mod list;
mod params;
mod service;

pub use get_by_slug::GetArticleBySlugQuery;
pub use list::ListArticlesByAuthorQuery;
pub use params::{ArticleListParams, parse_date, parse_flag};
pub use service::ArticleQueryService;
