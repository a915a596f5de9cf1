use crate::domain::errors::DomainResult;
use crate::domain::subscriber::{SubscribeOutcome, SubscriberRepository};
use crate::domain::user::Email;
use crate::infrastructure::repositories::map_sqlx;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

#[derive(Clone)]
pub struct PostgresSubscriberRepository {
    pool: PgPool,
}

impl PostgresSubscriberRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubscriberRepository for PostgresSubscriberRepository {
    async fn subscribe(
        &self,
        email: &Email,
        now: DateTime<Utc>,
    ) -> DomainResult<SubscribeOutcome> {
        let result = sqlx::query(
            "INSERT INTO subscribers (email, created_at) VALUES ($1, $2)
             ON CONFLICT (email) DO NOTHING",
        )
        .bind(email.as_str())
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(if result.rows_affected() == 0 {
            SubscribeOutcome::AlreadySubscribed
        } else {
            SubscribeOutcome::Created
        })
    }
}
