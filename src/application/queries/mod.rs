pub mod articles;
pub mod comments;
pub mod stats;
pub mod users;
