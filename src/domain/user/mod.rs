// src/domain/user/mod.rs
pub mod entity;
pub mod policy;
pub mod repository;
pub mod value_objects;

pub use entity::{NewUser, ReviewDecision, User, UserUpdate};
pub use policy::{AccessDenied, AccessPolicy};
pub use repository::UserRepository;
pub use value_objects::{ApprovalStatus, DisplayName, Email, PasswordHash, Role, UserId};
