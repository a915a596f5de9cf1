// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        access::ArticleGate,
        commands::{
            articles::ArticleCommandService, comments::CommentCommandService,
            subscribers::SubscriberCommandService, users::UserCommandService,
        },
        dto::AuthenticatedUser,
        error::ApplicationError,
        ports::{
            security::{PasswordHasher, TokenManager},
            time::Clock,
            util::SlugGenerator,
        },
        queries::{
            articles::ArticleQueryService, comments::CommentQueryService,
            stats::StatsQueryService, users::UserQueryService,
        },
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository, services::ArticleSlugService},
        comment::CommentRepository,
        subscriber::SubscriberRepository,
        user::UserRepository,
    },
};

pub const USER_NOT_FOUND: &str = "User not found.";

/// One storage backend's repositories.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub article_reads: Arc<dyn ArticleReadRepository>,
    pub article_writes: Arc<dyn ArticleWriteRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub subscribers: Arc<dyn SubscriberRepository>,
}

#[derive(Clone)]
pub struct Ports {
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_manager: Arc<dyn TokenManager>,
    pub clock: Arc<dyn Clock>,
    pub slugger: Arc<dyn SlugGenerator>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ServiceOptions {
    pub article_gate: ArticleGate,
    pub allow_role_registration: bool,
}

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub comment_queries: Arc<CommentQueryService>,
    pub subscriber_commands: Arc<SubscriberCommandService>,
    pub stats_queries: Arc<StatsQueryService>,
    users: Arc<dyn UserRepository>,
    token_manager: Arc<dyn TokenManager>,
    options: ServiceOptions,
}

impl ApplicationServices {
    pub fn new(repos: Repositories, ports: Ports, options: ServiceOptions) -> Self {
        let Ports {
            password_hasher,
            token_manager,
            clock,
            slugger,
        } = ports;

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&repos.users),
            Arc::clone(&password_hasher),
            Arc::clone(&token_manager),
            Arc::clone(&clock),
            options.allow_role_registration,
        ));
        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&repos.users)));

        let slug_service = Arc::new(ArticleSlugService::new(
            Arc::clone(&repos.article_reads),
            Arc::clone(&slugger),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&repos.article_writes),
            Arc::clone(&repos.article_reads),
            Arc::clone(&repos.comments),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
            options.article_gate,
        ));
        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&repos.article_reads),
            Arc::clone(&repos.article_writes),
            Arc::clone(&clock),
            options.article_gate,
        ));

        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&repos.comments),
            Arc::clone(&repos.article_reads),
            Arc::clone(&clock),
        ));
        let comment_queries = Arc::new(CommentQueryService::new(
            Arc::clone(&repos.comments),
            Arc::clone(&repos.article_reads),
        ));

        let subscriber_commands = Arc::new(SubscriberCommandService::new(
            Arc::clone(&repos.subscribers),
            Arc::clone(&clock),
        ));
        let stats_queries = Arc::new(StatsQueryService::new(
            Arc::clone(&repos.article_reads),
            Arc::clone(&repos.users),
        ));

        Self {
            user_commands,
            user_queries,
            article_commands,
            article_queries,
            comment_commands,
            comment_queries,
            subscriber_commands,
            stats_queries,
            users: repos.users,
            token_manager,
            options,
        }
    }

    pub fn options(&self) -> ServiceOptions {
        self.options
    }

    /// Verifies a bearer token and re-loads its user, so role and approval
    /// changes take effect without reissuing tokens.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let claims = self.token_manager.authenticate(token).await?;
        let user = self
            .users
            .find_by_id(claims.user_id)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized(USER_NOT_FOUND))?;
        Ok(AuthenticatedUser::from_parts(&user, &claims))
    }
}
