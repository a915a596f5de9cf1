use anyhow::{Context, Result};
use khabor::application::{
    access::ArticleGate,
    ports::security::TokenManager,
    services::{ApplicationServices, Ports, Repositories, ServiceOptions},
};
use khabor::config::AppConfig;
use khabor::infrastructure::{
    database,
    repositories::{memory_repositories, postgres_repositories},
    security::{Argon2PasswordHasher, BiscuitTokenManager},
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use khabor::presentation::http::{
    routes::{RouterOptions, build_router_with_options},
    state::HttpState,
};
use chrono::Utc;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let mode = config.storage_mode();

    let repositories = match config.database_url() {
        Some(url) => {
            let pool = database::init_pool(url)
                .await
                .context("connecting to DATABASE_URL")?;
            database::run_migrations(&pool)
                .await
                .context("running migrations")?;
            postgres_repositories(pool)
        }
        None => {
            tracing::warn!("DATABASE_URL not set; serving sample articles from memory");
            memory_repositories(Utc::now())
        }
    };
    tracing::info!(mode = mode.as_str(), "storage backend selected");

    let services = Arc::new(build_services(&config, repositories)?);
    let gate = services.options().article_gate;
    if gate.is_bypassed() {
        tracing::warn!("article gate bypassed; any caller may create, edit or delete articles");
    } else {
        tracing::info!("article gate enforced");
    }

    let state = HttpState { services, mode };
    let app = build_router_with_options(
        state,
        RouterOptions {
            allowed_origins: config.allowed_origins().clone(),
            rate_limit: config.rate_limit_enabled(),
        },
    );

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("server stopped");
    Ok(())
}

fn build_services(config: &AppConfig, repositories: Repositories) -> Result<ApplicationServices> {
    let token_manager: Arc<dyn TokenManager> = match config.biscuit_private_key() {
        Some(key) => Arc::new(BiscuitTokenManager::new(key, config.token_ttl())?),
        None => {
            tracing::warn!(
                "BISCUIT_ROOT_PRIVATE_KEY not set; using an ephemeral key, tokens will not survive a restart"
            );
            Arc::new(BiscuitTokenManager::ephemeral(config.token_ttl()))
        }
    };

    let ports = Ports {
        password_hasher: Arc::new(Argon2PasswordHasher),
        token_manager,
        clock: Arc::new(SystemClock),
        slugger: Arc::new(DefaultSlugGenerator),
    };
    let options = ServiceOptions {
        article_gate: ArticleGate::from_bypass(config.article_gate_bypass()),
        allow_role_registration: config.allow_role_registration(),
    };

    Ok(ApplicationServices::new(repositories, ports, options))
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
