// src/config.rs
use std::{env, net::SocketAddr, time::Duration};
use thiserror::Error;

/// Which backend holds the data for this process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMode {
    Memory,
    Postgres,
}

impl StorageMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageMode::Memory => "memory",
            StorageMode::Postgres => "postgres",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    Any,
    List(Vec<String>),
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: Option<String>,
    listen_addr: SocketAddr,
    biscuit_private_key: Option<String>,
    token_ttl: Duration,
    allowed_origins: AllowedOrigins,
    allow_role_registration: bool,
    article_gate_bypass: bool,
    rate_limit_enabled: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:5000";
const DEFAULT_TOKEN_TTL_SECS: u64 = 7 * 24 * 60 * 60;

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}

fn parse_origins(value: &str) -> AllowedOrigins {
    let origins: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| origin.trim_end_matches('/').to_string())
        .collect();
    if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
        AllowedOrigins::Any
    } else {
        AllowedOrigins::List(origins)
    }
}

impl AppConfig {
    /// Reads the process environment, after loading `.env` when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Blank values count as
    /// unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let database_url = get("DATABASE_URL");

        let listen_addr = get("LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|err| ConfigError::Invalid(format!("LISTEN_ADDR: {err}")))?;

        let biscuit_private_key = get("BISCUIT_ROOT_PRIVATE_KEY");
        if let Some(key) = &biscuit_private_key {
            if key.len() != 64 || !key.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(ConfigError::Invalid(
                    "BISCUIT_ROOT_PRIVATE_KEY must be a 32-byte hex string".into(),
                ));
            }
        }

        let token_ttl_secs = get("TOKEN_TTL_SECONDS")
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TOKEN_TTL_SECS);

        let allowed_origins = get("ALLOWED_ORIGINS")
            .map(|v| parse_origins(&v))
            .unwrap_or(AllowedOrigins::Any);

        let article_gate_bypass = get("ARTICLE_GATE_BYPASS")
            .map(|v| parse_bool(&v))
            .unwrap_or(database_url.is_none());

        Ok(Self {
            database_url,
            listen_addr,
            biscuit_private_key,
            token_ttl: Duration::from_secs(token_ttl_secs),
            allowed_origins,
            allow_role_registration: get("ALLOW_ROLE_REGISTRATION")
                .is_some_and(|v| parse_bool(&v)),
            article_gate_bypass,
            rate_limit_enabled: get("RATE_LIMIT_ENABLED").is_none_or(|v| parse_bool(&v)),
        })
    }

    pub fn storage_mode(&self) -> StorageMode {
        if self.database_url.is_some() {
            StorageMode::Postgres
        } else {
            StorageMode::Memory
        }
    }

    /// `None` selects the in-memory backend.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    pub fn listen_addr(&self) -> SocketAddr {
        self.listen_addr
    }

    /// `None` means an ephemeral signing key.
    pub fn biscuit_private_key(&self) -> Option<&str> {
        self.biscuit_private_key.as_deref()
    }

    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    pub fn allowed_origins(&self) -> &AllowedOrigins {
        &self.allowed_origins
    }

    pub fn allow_role_registration(&self) -> bool {
        self.allow_role_registration
    }

    pub fn article_gate_bypass(&self) -> bool {
        self.article_gate_bypass
    }

    pub fn rate_limit_enabled(&self) -> bool {
        self.rate_limit_enabled
    }
}
