use crate::domain::errors::DomainResult;
use crate::domain::subscriber::{SubscribeOutcome, Subscriber, SubscriberRepository};
use crate::domain::user::Email;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

#[derive(Default)]
struct SubscriberStore {
    next_id: i64,
    subscribers: Vec<Subscriber>,
}

#[derive(Default)]
pub struct InMemorySubscriberRepository {
    store: RwLock<SubscriberStore>,
}

#[async_trait]
impl SubscriberRepository for InMemorySubscriberRepository {
    async fn subscribe(
        &self,
        email: &Email,
        now: DateTime<Utc>,
    ) -> DomainResult<SubscribeOutcome> {
        let mut store = self.store.write().await;
        if store.subscribers.iter().any(|s| &s.email == email) {
            return Ok(SubscribeOutcome::AlreadySubscribed);
        }
        let id = store.next_id.max(1);
        store.next_id = id + 1;
        store.subscribers.push(Subscriber {
            id,
            email: email.clone(),
            created_at: now,
        });
        Ok(SubscribeOutcome::Created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn repeat_emails_are_idempotent() {
        let repo = InMemorySubscriberRepository::default();
        let now = Utc::now();
        let later = now + chrono::Duration::minutes(5);
        let first = Email::new("x@y.com").unwrap();
        let second = Email::new("X@Y.com").unwrap();
        assert_eq!(repo.subscribe(&first, now).await.unwrap(), SubscribeOutcome::Created);
        assert_eq!(
            repo.subscribe(&second, later).await.unwrap(),
            SubscribeOutcome::AlreadySubscribed
        );

        let store = repo.store.read().await;
        assert_eq!(store.subscribers.len(), 1);
        assert_eq!(store.subscribers[0].email, first);
        assert_eq!(store.subscribers[0].created_at, now);
    }
}
