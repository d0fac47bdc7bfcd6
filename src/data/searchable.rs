//! The filter → sort → paginate search pipeline.
//!
//! Concrete entity types describe how they are searched through the
//! [`Searchable`] capability; the pipeline functions here stay generic and
//! always run the stages in the same order. Filtering runs before counting, so
//! `total` is the number of matches rather than the number of stored items.

use crate::{
    domain::search::{SearchParams, SearchResult, SearchResultProps, SortDirection, SortKey},
    error::validation::EntityValidationError,
};

/// How a concrete entity type is filtered and sorted.
pub trait Searchable<E>: Send + Sync {
    /// Fields that may be sorted by. Requests for any other field keep the
    /// input order.
    fn sortable_fields(&self) -> &'static [&'static str];

    /// Whether `item` matches a (non-blank) filter.
    fn matches(&self, item: &E, filter: &str) -> bool;

    /// Sort value of `field` for `item`.
    fn sort_key(&self, item: &E, field: &str) -> Option<SortKey>;

    /// Sort applied when the request carries none.
    fn default_sort(&self) -> Option<(&'static str, SortDirection)> {
        None
    }
}

/// Keeps the items matching `filter`.
///
/// Without a filter the items pass through and the predicate is never called.
pub fn apply_filter<E, S>(items: Vec<E>, filter: Option<&str>, searchable: &S) -> Vec<E>
where
    S: Searchable<E> + ?Sized,
{
    match filter {
        Some(filter) => items
            .into_iter()
            .filter(|item| searchable.matches(item, filter))
            .collect(),
        None => items,
    }
}

/// Stable sort by `sort` in direction `order` (ascending when absent).
///
/// Returns the items unchanged when `sort` is absent or not a sortable field.
/// Items with equal keys keep their relative order in both directions.
pub fn apply_sort<E, S>(
    items: Vec<E>,
    sort: Option<&str>,
    order: Option<SortDirection>,
    searchable: &S,
) -> Vec<E>
where
    S: Searchable<E> + ?Sized,
{
    let Some(field) = sort.filter(|field| is_sortable(searchable.sortable_fields(), field)) else {
        return items;
    };
    let direction = order.unwrap_or(SortDirection::Asc);

    let mut keyed: Vec<(Option<SortKey>, E)> = items
        .into_iter()
        .map(|item| (searchable.sort_key(&item, field), item))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| match direction {
        SortDirection::Asc => a.cmp(b),
        SortDirection::Desc => b.cmp(a),
    });

    keyed.into_iter().map(|(_, item)| item).collect()
}

/// Whether `field` is in the allow-list of sortable fields.
pub fn is_sortable(sortable_fields: &[&str], field: &str) -> bool {
    sortable_fields.iter().any(|sortable| *sortable == field)
}

/// Returns the `[(page - 1) * limit, page * limit)` slice.
///
/// Pages past the end yield an empty slice.
pub fn apply_paginate<E>(items: Vec<E>, page: u64, limit: u64) -> Vec<E> {
    let offset = page.saturating_sub(1).saturating_mul(limit);
    let skip = usize::try_from(offset).unwrap_or(usize::MAX);
    let take = usize::try_from(limit).unwrap_or(usize::MAX);

    items.into_iter().skip(skip).take(take).collect()
}

/// Sort actually applied for a request: the requested one, or the
/// capability's default when the request has no sort.
pub fn resolve_sort<'p, E, S>(
    params: &'p SearchParams,
    searchable: &S,
) -> (Option<&'p str>, Option<SortDirection>)
where
    S: Searchable<E> + ?Sized,
{
    match params.sort() {
        Some(sort) => (Some(sort), params.order()),
        None => match searchable.default_sort() {
            Some((field, direction)) => (Some(field), Some(direction)),
            None => (None, None),
        },
    }
}

/// Runs the whole pipeline over an in-memory candidate set.
pub fn search<E, S>(
    items: Vec<E>,
    params: &SearchParams,
    searchable: &S,
) -> Result<SearchResult<E>, EntityValidationError>
where
    S: Searchable<E> + ?Sized,
{
    let filtered = apply_filter(items, params.filter(), searchable);
    let total = u64::try_from(filtered.len()).unwrap_or(u64::MAX);

    let (sort, order) = resolve_sort::<E, S>(params, searchable);
    let sorted = apply_sort(filtered, sort, order, searchable);

    let page = apply_paginate(sorted, params.page(), params.limit());

    tracing::debug!(
        total,
        page = params.page(),
        limit = params.limit(),
        returned = page.len(),
        "Search pipeline completed"
    );

    into_result(page, total, params)
}

/// Wraps a computed page into a validated result echoing the request.
pub fn into_result<E>(
    items: Vec<E>,
    total: u64,
    params: &SearchParams,
) -> Result<SearchResult<E>, EntityValidationError> {
    SearchResult::new(SearchResultProps {
        items: Some(items),
        total: signed(total),
        current_page: signed(params.page()),
        limit: signed(params.limit()),
        sort: params.sort().map(str::to_string),
        order: params.order().map(|order| order.to_string()),
        filter: params.filter().map(str::to_string),
    })
}

fn signed(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
