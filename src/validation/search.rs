//! Validators for the search request and response schemas.

use std::marker::PhantomData;

use crate::{
    domain::search::{
        params::{DEFAULT_LIMIT, DEFAULT_PAGE},
        SearchParams, SearchResult, SearchResultProps, SortDirection,
    },
    model::search::SearchParamsInput,
    validation::{coerce, ErrorTree, Validator},
};

/// Normalizes raw search input.
///
/// Every field has a fallback, so validation always succeeds. The sort/order
/// pairing is applied after the per-field pass: `order` defaults to `asc` when a
/// sort is present and is cleared when it is not.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchParamsValidator;

impl Validator for SearchParamsValidator {
    type Input = SearchParamsInput;
    type Output = SearchParams;

    fn validate(&self, input: SearchParamsInput) -> Result<SearchParams, ErrorTree> {
        let page = coerce::positive_int(input.page.as_ref()).unwrap_or(DEFAULT_PAGE);
        let limit = coerce::positive_int(input.limit.as_ref()).unwrap_or(DEFAULT_LIMIT);
        let sort = coerce::trimmed_string(input.sort.as_ref());
        let order = coerce::sort_direction(input.order.as_ref()).unwrap_or(SortDirection::Asc);
        let filter = coerce::non_blank_string(input.filter.as_ref());

        let order = sort.as_ref().map(|_| order);

        Ok(SearchParams {
            page,
            limit,
            sort,
            order,
            filter,
        })
    }
}

/// Strictly validates a search result before it is handed to callers.
///
/// Nothing is corrected: any violated rule is reported under its field.
pub struct SearchResultValidator<E> {
    item: PhantomData<fn() -> E>,
}

impl<E> SearchResultValidator<E> {
    pub fn new() -> Self {
        Self { item: PhantomData }
    }
}

impl<E> Default for SearchResultValidator<E> {
    fn default() -> Self {
        Self::new()
    }
}

fn non_negative(errors: &mut ErrorTree, field: &str, value: i64) -> u64 {
    u64::try_from(value).unwrap_or_else(|_| {
        errors.add(field, "Number must be greater than or equal to 0");
        0
    })
}

fn positive(errors: &mut ErrorTree, field: &str, value: i64) -> u64 {
    match u64::try_from(value) {
        Ok(value) if value >= 1 => value,
        _ => {
            errors.add(field, "Number must be greater than or equal to 1");
            1
        }
    }
}

fn nullable_non_blank(
    errors: &mut ErrorTree,
    field: &str,
    value: Option<String>,
) -> Option<String> {
    match value {
        Some(text) if text.trim().is_empty() => {
            errors.add(field, "String must contain at least 1 character(s)");
            None
        }
        other => other,
    }
}

impl<E> Validator for SearchResultValidator<E> {
    type Input = SearchResultProps<E>;
    type Output = SearchResult<E>;

    fn validate(&self, input: SearchResultProps<E>) -> Result<SearchResult<E>, ErrorTree> {
        let mut errors = ErrorTree::new();

        let items = input.items.unwrap_or_else(|| {
            errors.add("items", "Required");
            Vec::new()
        });
        let total = non_negative(&mut errors, "total", input.total);
        let current_page = positive(&mut errors, "current_page", input.current_page);
        let limit = positive(&mut errors, "limit", input.limit);

        let sort = nullable_non_blank(
            &mut errors,
            "sort",
            input.sort.map(|s| s.trim().to_string()),
        );
        let filter = nullable_non_blank(&mut errors, "filter", input.filter);

        let order_supplied = input.order.is_some();
        let order = match input.order {
            Some(order) => match SortDirection::parse(&order) {
                Some(direction) => Some(direction),
                None => {
                    errors.add("order", "Invalid enum value. Expected 'asc' | 'desc'");
                    None
                }
            },
            None => None,
        };

        // Sort and order travel together; both refinements report under `order`.
        match (sort.is_some(), order_supplied) {
            (true, false) => errors.add("order", "order is required when sort is provided"),
            (false, true) => errors.add("order", "order must be null when sort is not provided"),
            _ => {}
        }

        errors.into_result(SearchResult {
            items,
            total,
            current_page,
            limit,
            last_page: total.div_ceil(limit),
            sort,
            order,
            filter,
        })
    }
}
