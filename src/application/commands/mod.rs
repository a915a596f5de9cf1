pub mod articles;
pub mod comments;
pub mod subscribers;
pub mod users;
