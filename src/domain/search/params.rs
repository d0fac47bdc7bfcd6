use serde::Serialize;

use crate::{
    domain::search::SortDirection,
    model::search::SearchParamsInput,
    validation::{search::SearchParamsValidator, Validator},
};

/// Page used when the requested page is missing or invalid.
pub const DEFAULT_PAGE: u64 = 1;

/// Page size used when the requested limit is missing or invalid.
pub const DEFAULT_LIMIT: u64 = 15;

/// Normalized search request.
///
/// Built from raw caller input and never fails: each field that cannot be
/// coerced falls back to its default. `order` is `None` exactly when `sort` is
/// `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchParams {
    pub(crate) page: u64,
    pub(crate) limit: u64,
    pub(crate) sort: Option<String>,
    pub(crate) order: Option<SortDirection>,
    pub(crate) filter: Option<String>,
}

impl SearchParams {
    /// Normalizes raw search input, falling back to defaults per field.
    pub fn new(input: SearchParamsInput) -> Self {
        SearchParamsValidator
            .validate(input)
            .unwrap_or_default()
    }

    /// 1-based page number.
    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Requested sort field, trimmed.
    pub fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    pub fn order(&self) -> Option<SortDirection> {
        self.order
    }

    /// Requested filter. Never blank.
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// Number of items preceding the requested page, or `None` when it does
    /// not fit in a `u64`.
    pub fn offset(&self) -> Option<u64> {
        self.page.saturating_sub(1).checked_mul(self.limit)
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            sort: None,
            order: None,
            filter: None,
        }
    }
}

impl From<SearchParamsInput> for SearchParams {
    fn from(input: SearchParamsInput) -> Self {
        Self::new(input)
    }
}
