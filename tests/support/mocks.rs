// tests/support/mocks.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use khabor::application::{
    ApplicationResult,
    ports::{security::PasswordHasher, time::Clock},
};
use once_cell::sync::Lazy;

/// Fixed timestamp every test app runs at.
static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-06-01T06:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks.rs")
        .with_timezone(&Utc)
});

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

pub struct DummyClock;

impl Clock for DummyClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}

/// Reversible stand-in for Argon2 so tests stay fast.
pub struct DummyPasswordHasher;

#[async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<bool> {
        Ok(expected_hash == format!("hashed:{password}"))
    }
}
