mod list;
mod profile;
mod service;

pub use list::ListJournalistsQuery;
pub use service::UserQueryService;
