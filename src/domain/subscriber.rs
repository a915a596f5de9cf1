// src/domain/subscriber.rs
use crate::domain::errors::DomainResult;
use crate::domain::user::Email;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Subscriber {
    pub id: i64,
    pub email: Email,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscribeOutcome {
    Created,
    AlreadySubscribed,
}

#[async_trait]
pub trait SubscriberRepository: Send + Sync {
    /// Idempotent: a repeated email leaves the stored record untouched.
    async fn subscribe(&self, email: &Email, now: DateTime<Utc>)
    -> DomainResult<SubscribeOutcome>;
}
