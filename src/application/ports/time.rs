// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Wall clock for publication stamps, token lifetimes and the trending
/// window. Tests pin it to a fixed instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
