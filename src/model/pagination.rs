use serde::{Deserialize, Serialize};

/// Page of mapped items with pagination metadata.
///
/// Produced from a search result by `SearchResult::into_dto`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationOutputDto<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub current_page: u64,
    pub last_page: u64,
    pub limit: u64,
}
