// src/application/commands/subscribers.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::SubscriptionDto,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        subscriber::{SubscribeOutcome, SubscriberRepository},
        user::Email,
    },
};

pub const ALREADY_SUBSCRIBED: &str = "Already subscribed";

pub struct SubscribeCommand {
    pub email: String,
}

pub struct SubscriberCommandService {
    repo: Arc<dyn SubscriberRepository>,
    clock: Arc<dyn Clock>,
}

impl SubscriberCommandService {
    pub fn new(repo: Arc<dyn SubscriberRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    /// Returns the outcome so callers can tell a new subscription from a
    /// repeat; both are successes.
    pub async fn subscribe(
        &self,
        command: SubscribeCommand,
    ) -> ApplicationResult<(SubscribeOutcome, SubscriptionDto)> {
        let email = Email::new(command.email)
            .map_err(|_| ApplicationError::validation("Valid email required"))?;
        let outcome = self.repo.subscribe(&email, self.clock.now()).await?;
        let message = match outcome {
            SubscribeOutcome::Created => None,
            SubscribeOutcome::AlreadySubscribed => Some(ALREADY_SUBSCRIBED.to_string()),
        };
        Ok((
            outcome,
            SubscriptionDto {
                email: email.into(),
                message,
            },
        ))
    }
}
