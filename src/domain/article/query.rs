// src/domain/article/query.rs
use crate::domain::article::entity::Article;
use chrono::{DateTime, Duration, Utc};
use std::cmp::Ordering;

/// Length of the trailing "trending" window.
pub const TRENDING_WINDOW_DAYS: i64 = 7;

pub fn trending_cutoff(now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::days(TRENDING_WINDOW_DAYS)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArticleSort {
    /// Publication time, newest first; unpublished rows last.
    #[default]
    Recency,
    Views,
    /// Creation time, newest first. Used by newsroom listings.
    Created,
}

impl ArticleSort {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(value) if value.eq_ignore_ascii_case("views") => ArticleSort::Views,
            _ => ArticleSort::Recency,
        }
    }

    /// Total order used by the in-memory store. Ties fall back to id
    /// descending so results match the SQL `ORDER BY`.
    pub fn compare(&self, a: &Article, b: &Article) -> Ordering {
        let primary = match self {
            ArticleSort::Recency => match (a.published_at, b.published_at) {
                (Some(x), Some(y)) => y.cmp(&x),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            ArticleSort::Views => b.views.cmp(&a.views),
            ArticleSort::Created => b.created_at.cmp(&a.created_at),
        };
        primary.then_with(|| b.id.cmp(&a.id))
    }
}

/// Normalized listing filter shared by both storage backends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    pub text: Option<String>,
    pub category: Option<String>,
    pub tag: Option<String>,
    pub published_from: Option<DateTime<Utc>>,
    pub published_to: Option<DateTime<Utc>>,
    pub published_only: bool,
    pub sort: ArticleSort,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl ArticleFilter {
    /// Filter for reader-facing listings: published articles only.
    pub fn public() -> Self {
        Self {
            published_only: true,
            ..Self::default()
        }
    }

    /// Filter for newsroom listings: drafts included, newest first.
    pub fn newsroom() -> Self {
        Self {
            published_only: false,
            sort: ArticleSort::Created,
            ..Self::default()
        }
    }

    pub fn with_text(mut self, text: Option<String>) -> Self {
        self.text = non_blank(text);
        self
    }

    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = non_blank(category);
        self
    }

    pub fn with_tag(mut self, tag: Option<String>) -> Self {
        self.tag = non_blank(tag);
        self
    }

    pub fn with_range(
        mut self,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Self {
        self.published_from = from;
        self.published_to = to;
        self
    }

    pub fn with_sort(mut self, sort: ArticleSort) -> Self {
        self.sort = sort;
        self
    }

    /// Restricts to the trailing trending window. An explicit lower bound
    /// later than the window start is kept.
    pub fn with_trending_window(mut self, now: DateTime<Utc>) -> Self {
        let cutoff = trending_cutoff(now);
        self.published_from = Some(match self.published_from {
            Some(from) if from > cutoff => from,
            _ => cutoff,
        });
        self
    }

    pub fn has_date_bounds(&self) -> bool {
        self.published_from.is_some() || self.published_to.is_some()
    }

    pub fn matches(&self, article: &Article) -> bool {
        if self.published_only && !article.is_published() {
            return false;
        }
        if let Some(text) = &self.text {
            let needle = text.to_lowercase();
            let in_title = article.title.as_str().to_lowercase().contains(&needle);
            let in_excerpt = article.excerpt.to_lowercase().contains(&needle);
            if !in_title && !in_excerpt {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if &article.category != category {
                return false;
            }
        }
        if let Some(tag) = &self.tag {
            if !article.tags.iter().any(|t| t == tag) {
                return false;
            }
        }
        if self.has_date_bounds() {
            let Some(published_at) = article.published_at else {
                return false;
            };
            if let Some(from) = self.published_from {
                if published_at < from {
                    return false;
                }
            }
            if let Some(to) = self.published_to {
                if published_at > to {
                    return false;
                }
            }
        }
        true
    }
}
