use crate::application::{
    dto::TokenClaims,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::{Role, UserId};
use biscuit_auth::builder::{Fact, Predicate, Term};
use chrono::{DateTime, Utc};
use std::time::{Duration, UNIX_EPOCH};

/// Reads the authority facts written by `BiscuitTokenManager::issue`.
pub fn parse_claims(facts: Vec<Fact>) -> ApplicationResult<TokenClaims> {
    let mut ctx = ClaimsContext::default();
    for fact in facts {
        ctx.apply(fact.predicate);
    }
    ctx.into_claims()
}

#[derive(Default)]
struct ClaimsContext {
    user_id: Option<i64>,
    name: Option<String>,
    role: Option<Role>,
    issued_at: Option<DateTime<Utc>>,
    expires_at: Option<DateTime<Utc>>,
}

impl ClaimsContext {
    fn apply(&mut self, predicate: Predicate) {
        let mut terms = predicate.terms.into_iter();
        match predicate.name.as_str() {
            "user" => {
                if let Some(Term::Integer(id)) = terms.next() {
                    self.user_id = Some(id);
                }
                if let Some(Term::Str(name)) = terms.next() {
                    self.name = Some(name);
                }
            }
            "role" => {
                if let Some(Term::Str(role)) = terms.next() {
                    self.role = role.parse().ok();
                }
            }
            "issued_at" => self.issued_at = terms.next().and_then(date_term),
            "expires_at" => self.expires_at = terms.next().and_then(date_term),
            _ => {}
        }
    }

    fn into_claims(self) -> ApplicationResult<TokenClaims> {
        let user_id = self
            .user_id
            .ok_or_else(|| ApplicationError::unauthorized("missing user id"))?;
        Ok(TokenClaims {
            user_id: UserId::new(user_id)
                .map_err(|_| ApplicationError::unauthorized("invalid user id"))?,
            name: self
                .name
                .ok_or_else(|| ApplicationError::unauthorized("missing user name"))?,
            role: self
                .role
                .ok_or_else(|| ApplicationError::unauthorized("missing role"))?,
            issued_at: self
                .issued_at
                .ok_or_else(|| ApplicationError::unauthorized("missing issued_at"))?,
            expires_at: self
                .expires_at
                .ok_or_else(|| ApplicationError::unauthorized("missing expires_at"))?,
        })
    }
}

fn date_term(term: Term) -> Option<DateTime<Utc>> {
    match term {
        Term::Date(seconds) => Some(DateTime::<Utc>::from(UNIX_EPOCH + Duration::from_secs(seconds))),
        _ => None,
    }
}
