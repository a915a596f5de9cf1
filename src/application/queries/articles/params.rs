use crate::domain::article::{ArticleFilter, ArticleSort};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

/// Raw listing parameters exactly as they arrive in the query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleListParams {
    pub q: Option<String>,
    pub category: Option<String>,
    pub tag: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub sort: Option<String>,
    pub trending: Option<String>,
    pub limit: Option<String>,
    pub page: Option<String>,
}

/// RFC 3339, or a bare `YYYY-MM-DD` taken as midnight UTC. Anything else is
/// treated as an absent bound.
pub fn parse_date(raw: Option<&str>, field: &'static str) -> Option<DateTime<Utc>> {
    let raw = raw.map(str::trim).filter(|value| !value.is_empty())?;
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Some(midnight) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Some(midnight.and_utc());
    }
    tracing::debug!(field, value = raw, "ignoring unparsable date bound");
    None
}

/// Present and not `0`, `false` or empty.
pub fn parse_flag(raw: Option<&str>) -> bool {
    match raw.map(str::trim) {
        None | Some("") | Some("0") => false,
        Some(value) => !value.eq_ignore_ascii_case("false"),
    }
}

impl ArticleListParams {
    /// Reader-facing filter: published only, every filter honoured.
    pub fn public_filter(&self, now: DateTime<Utc>) -> ArticleFilter {
        let filter = ArticleFilter::public()
            .with_text(self.q.clone())
            .with_category(self.category.clone())
            .with_tag(self.tag.clone())
            .with_range(
                parse_date(self.from.as_deref(), "from"),
                parse_date(self.to.as_deref(), "to"),
            )
            .with_sort(ArticleSort::parse(self.sort.as_deref()));
        if parse_flag(self.trending.as_deref()) {
            filter.with_trending_window(now)
        } else {
            filter
        }
    }

    /// Newsroom filter: drafts included, text/category/tag only.
    pub fn newsroom_filter(&self) -> ArticleFilter {
        ArticleFilter::newsroom()
            .with_text(self.q.clone())
            .with_category(self.category.clone())
            .with_tag(self.tag.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::trending_cutoff;
    use chrono::TimeZone;

    #[test]
    fn dates_accept_rfc3339_and_plain_days() {
        let day = parse_date(Some("2024-03-05"), "from").unwrap();
        assert_eq!(day, Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap());
        let full = parse_date(Some("2024-03-05T10:30:00+06:00"), "to").unwrap();
        assert_eq!(full, Utc.with_ymd_and_hms(2024, 3, 5, 4, 30, 0).unwrap());
    }

    #[test]
    fn malformed_dates_are_ignored() {
        assert_eq!(parse_date(Some("yesterday"), "from"), None);
        assert_eq!(parse_date(Some("2024-13-40"), "from"), None);
        assert_eq!(parse_date(Some(""), "from"), None);
    }

    #[test]
    fn trending_flag_values() {
        assert!(parse_flag(Some("1")));
        assert!(parse_flag(Some("true")));
        assert!(!parse_flag(Some("0")));
        assert!(!parse_flag(Some("FALSE")));
        assert!(!parse_flag(Some("")));
        assert!(!parse_flag(None));
    }

    #[test]
    fn public_filter_combines_trending_with_upper_bound() {
        let now = Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap();
        let params = ArticleListParams {
            to: Some("2024-06-09".into()),
            trending: Some("1".into()),
            sort: Some("views".into()),
            ..Default::default()
        };
        let filter = params.public_filter(now);
        assert!(filter.published_only);
        assert_eq!(filter.published_from, Some(trending_cutoff(now)));
        assert_eq!(
            filter.published_to,
            Some(Utc.with_ymd_and_hms(2024, 6, 9, 0, 0, 0).unwrap())
        );
        assert_eq!(filter.sort, ArticleSort::Views);
    }

    #[test]
    fn newsroom_filter_ignores_dates_and_sort() {
        let params = ArticleListParams {
            from: Some("2024-01-01".into()),
            sort: Some("views".into()),
            category: Some("sports".into()),
            ..Default::default()
        };
        let filter = params.newsroom_filter();
        assert!(!filter.published_only);
        assert_eq!(filter.published_from, None);
        assert_eq!(filter.sort, ArticleSort::Created);
        assert_eq!(filter.category.as_deref(), Some("sports"));
    }
}
