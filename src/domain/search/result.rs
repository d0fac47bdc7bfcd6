use serde::Serialize;

use crate::{
    domain::search::SortDirection,
    error::validation::EntityValidationError,
    model::pagination::PaginationOutputDto,
    validation::{search::SearchResultValidator, Validator},
};

/// Raw data a search result is constructed from.
///
/// Numbers are signed and `items` optional so malformed results can be
/// described and rejected by validation.
#[derive(Debug, Clone)]
pub struct SearchResultProps<E> {
    pub items: Option<Vec<E>>,
    pub total: i64,
    pub current_page: i64,
    pub limit: i64,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub filter: Option<String>,
}

/// Validated page of search results and its pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult<E> {
    pub(crate) items: Vec<E>,
    pub(crate) total: u64,
    pub(crate) current_page: u64,
    pub(crate) limit: u64,
    pub(crate) last_page: u64,
    pub(crate) sort: Option<String>,
    pub(crate) order: Option<SortDirection>,
    pub(crate) filter: Option<String>,
}

impl<E> SearchResult<E> {
    /// Validates the props and builds the result.
    ///
    /// # Returns
    /// - `Ok(SearchResult)` - All fields valid, `last_page` computed
    /// - `Err(EntityValidationError)` - Error tree describing every invalid field
    pub fn new(props: SearchResultProps<E>) -> Result<Self, EntityValidationError> {
        SearchResultValidator::new()
            .validate(props)
            .map_err(EntityValidationError::new)
    }

    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn into_items(self) -> Vec<E> {
        self.items
    }

    /// Number of matching items across all pages.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// `ceil(total / limit)`; zero when there are no matches.
    pub fn last_page(&self) -> u64 {
        self.last_page
    }

    pub fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    pub fn order(&self) -> Option<SortDirection> {
        self.order
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// Maps the page into the transport-agnostic pagination output.
    ///
    /// Trusts the invariants checked at construction; no validation happens here.
    pub fn into_dto<T>(self, transform: impl FnMut(E) -> T) -> PaginationOutputDto<T> {
        PaginationOutputDto {
            items: self.items.into_iter().map(transform).collect(),
            total: self.total,
            current_page: self.current_page,
            last_page: self.last_page,
            limit: self.limit,
        }
    }
}
