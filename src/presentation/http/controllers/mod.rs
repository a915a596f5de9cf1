pub mod articles;
pub mod auth;
pub mod comments;
pub mod stats;
pub mod subscribers;
pub mod system;
