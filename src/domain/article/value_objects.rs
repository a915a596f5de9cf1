use crate::domain::errors::{DomainError, DomainResult};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "article id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trims `value` and rejects it when nothing is left.
pub fn required_text(field: &str, value: impl Into<String>) -> DomainResult<String> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation(format!("{field} cannot be empty")));
    }
    Ok(trimmed.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        required_text("title", value).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// URL-safe identifier; unique across all articles.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleSlug(String);

impl ArticleSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = required_text("slug", value)?;
        if value.chars().any(|c| c.is_whitespace() || c == '/' || c == '?' || c == '#') {
            return Err(DomainError::Validation(
                "slug cannot contain whitespace, '/', '?' or '#'".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleBody(String);

impl ArticleBody {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        required_text("body", value).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ArticleStatus {
    Draft,
    #[default]
    Published,
}

impl ArticleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Draft => "draft",
            ArticleStatus::Published => "published",
        }
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(ArticleStatus::Draft),
            "published" => Ok(ArticleStatus::Published),
            other => Err(DomainError::Validation(format!(
                "unknown article status '{other}'"
            ))),
        }
    }
}

/// Path segment addressing an article either by numeric id or by slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleKey {
    Id(ArticleId),
    Slug(ArticleSlug),
}

impl ArticleKey {
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let raw = raw.trim();
        match raw.parse::<i64>() {
            Ok(id) if id > 0 => Ok(Self::Id(ArticleId(id))),
            _ => ArticleSlug::new(raw).map(Self::Slug),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_trimmed_and_required() {
        assert_eq!(ArticleTitle::new("  শিরোনাম ").unwrap().as_str(), "শিরোনাম");
        assert!(ArticleTitle::new("   ").is_err());
    }

    #[test]
    fn slug_rejects_separators() {
        assert!(ArticleSlug::new("sample-1").is_ok());
        assert!(ArticleSlug::new("a b").is_err());
        assert!(ArticleSlug::new("a/b").is_err());
    }

    #[test]
    fn key_prefers_numeric_ids() {
        assert_eq!(ArticleKey::parse("42").unwrap(), ArticleKey::Id(ArticleId(42)));
        assert_eq!(
            ArticleKey::parse("sample-1").unwrap(),
            ArticleKey::Slug(ArticleSlug::new("sample-1").unwrap())
        );
        assert!(matches!(ArticleKey::parse("-3").unwrap(), ArticleKey::Slug(_)));
    }

    #[test]
    fn status_round_trips_through_str() {
        assert_eq!("draft".parse::<ArticleStatus>().unwrap(), ArticleStatus::Draft);
        assert_eq!(ArticleStatus::default().as_str(), "published");
        assert!("archived".parse::<ArticleStatus>().is_err());
    }
}
