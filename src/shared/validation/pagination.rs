use serde::Deserialize;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 100;
pub const MAX_PAGE: u64 = 1_000_000;

/// Page window after defaults and clamping. Always `1 <= page <= MAX_PAGE` and
/// `1 <= limit <= MAX_LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }

    pub fn pages(&self, total: u64) -> u64 {
        total.div_ceil(self.limit)
    }
}

/// Raw `?page=&limit=` pair as it arrives on the query string.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PageQuery {
    pub fn pagination(&self) -> Pagination {
        validate_pagination(self.page.as_deref(), self.limit.as_deref())
    }
}

/// Missing, non-numeric, zero or negative inputs fall back to the defaults;
/// an oversized page or limit is clamped instead of rejected.
pub fn validate_pagination(page: Option<&str>, limit: Option<&str>) -> Pagination {
    let page = parse_positive(page).unwrap_or(DEFAULT_PAGE).min(MAX_PAGE);
    let limit = parse_positive(limit)
        .unwrap_or(DEFAULT_LIMIT)
        .min(MAX_LIMIT);

    Pagination { page, limit }
}

fn parse_positive(raw: Option<&str>) -> Option<u64> {
    raw?.trim()
        .parse::<i64>()
        .ok()
        .filter(|n| *n > 0)
        .map(|n| n as u64)
}
