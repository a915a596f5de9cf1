// src/domain/pagination.rs

/// Default and maximum page size for one kind of listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub default_limit: u32,
    pub max_limit: u32,
}

impl PageLimits {
    pub const PUBLIC: PageLimits = PageLimits {
        default_limit: 10,
        max_limit: 50,
    };

    pub const ADMIN: PageLimits = PageLimits {
        default_limit: 50,
        max_limit: 100,
    };
}

/// A clamped page window. `page` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

fn parse_positive(raw: Option<&str>) -> Option<u32> {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .filter(|value| *value > 0)
        .map(|value| u32::try_from(value).unwrap_or(u32::MAX))
}

impl PageRequest {
    /// Parses raw query values. Non-numeric, zero or negative input falls back
    /// to the defaults; the limit is capped at the ceiling.
    pub fn parse(page: Option<&str>, limit: Option<&str>, limits: PageLimits) -> Self {
        let page = parse_positive(page).unwrap_or(1);
        let limit = parse_positive(limit)
            .unwrap_or(limits.default_limit)
            .min(limits.max_limit);
        Self { page, limit }
    }

    pub fn public(page: Option<&str>, limit: Option<&str>) -> Self {
        Self::parse(page, limit, PageLimits::PUBLIC)
    }

    pub fn admin(page: Option<&str>, limit: Option<&str>) -> Self {
        Self::parse(page, limit, PageLimits::ADMIN)
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1).saturating_mul(u64::from(self.limit))
    }

    /// Applies the window to an already ordered sequence.
    pub fn slice<T>(&self, items: Vec<T>) -> Vec<T> {
        let offset = usize::try_from(self.offset()).unwrap_or(usize::MAX);
        items
            .into_iter()
            .skip(offset)
            .take(usize::try_from(self.limit).unwrap_or(usize::MAX))
            .collect()
    }
}
