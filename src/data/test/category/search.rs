use super::*;
use crate::data::category::CategoryInMemoryRepository;

fn names(categories: &[Category]) -> Vec<&str> {
    categories.iter().map(|c| c.name()).collect()
}

/// Tests search without parameters.
///
/// Verifies that the default page size applies and the newest categories
/// come first when no sort is requested.
///
/// Expected: Ok with first 15 of 16 categories, newest first
#[tokio::test]
async fn applies_defaults_without_params() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let names_in: Vec<String> = (0..16).map(|i| format!("Movie {i}")).collect();
    let refs: Vec<&str> = names_in.iter().map(String::as_str).collect();
    factory::category::create_categories(db, &refs).await?;

    let repo = CategoryRepository::new(db);
    let result = repo.search(&SearchParams::default()).await?;

    assert_eq!(result.items().len(), 15);
    assert_eq!(result.items()[0].name(), "Movie 15");
    assert_eq!(result.items()[14].name(), "Movie 1");
    assert_eq!(result.total(), 16);
    assert_eq!(result.current_page(), 1);
    assert_eq!(result.last_page(), 2);
    assert_eq!(result.limit(), 15);
    assert_eq!(result.sort(), None);
    assert_eq!(result.order(), None);
    assert_eq!(result.filter(), None);

    Ok(())
}

/// Tests filtering with surrounding whitespace kept in the filter.
///
/// Verifies that " a " only matches names containing the spaced letter,
/// that the total counts all matches and that newest matches come first.
///
/// Expected: Ok with 3 of 5 matches, total 5, last page 2
#[tokio::test]
async fn filters_by_name_and_counts_matches() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let names_in: Vec<String> = (0..9)
        .map(|i| {
            if i % 2 == 0 {
                format!("Category a {i}")
            } else {
                format!("Category b {i}")
            }
        })
        .collect();
    let refs: Vec<&str> = names_in.iter().map(String::as_str).collect();
    factory::category::create_categories(db, &refs).await?;

    let repo = CategoryRepository::new(db);
    let result = repo
        .search(&SearchParams::new(
            SearchParamsInput::new().filter(" a ").limit(3),
        ))
        .await?;

    assert_eq!(
        names(result.items()),
        ["Category a 8", "Category a 6", "Category a 4"]
    );
    assert_eq!(result.total(), 5);
    assert_eq!(result.last_page(), 2);
    assert_eq!(result.filter(), Some(" a "));

    Ok(())
}

/// Tests filtering ignores letter case.
///
/// Expected: Ok with all names containing "test" in any case
#[tokio::test]
async fn filters_case_insensitively() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::category::create_categories(db, &["test", "a", "TEST", "TeSt"]).await?;

    let repo = CategoryRepository::new(db);
    let result = repo
        .search(&SearchParams::new(
            SearchParamsInput::new().filter("TEST").sort("name"),
        ))
        .await?;

    assert_eq!(names(result.items()), ["TEST", "TeSt", "test"]);
    assert_eq!(result.total(), 3);

    Ok(())
}

/// Tests sorting by name in both directions.
///
/// Verifies that name ordering is case-sensitive and pages are cut after
/// sorting.
///
/// Expected: Ok with smallest names first for asc and largest first for desc
#[tokio::test]
async fn sorts_by_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::category::create_categories(
        db,
        &["b", "a", "d", "C", "B", "E", "c", "e", "A", "D", "f", "F"],
    )
    .await?;

    let repo = CategoryRepository::new(db);

    let asc = repo
        .search(&SearchParams::new(
            SearchParamsInput::new()
                .sort("name")
                .order("asc")
                .limit(3)
                .page(1),
        ))
        .await?;
    assert_eq!(names(asc.items()), ["A", "B", "C"]);
    assert_eq!(asc.current_page(), 1);
    assert_eq!(asc.last_page(), 4);
    assert_eq!(asc.order(), Some(SortDirection::Asc));

    let desc = repo
        .search(&SearchParams::new(
            SearchParamsInput::new()
                .sort("name")
                .order("desc")
                .limit(3)
                .page(2),
        ))
        .await?;
    assert_eq!(names(desc.items()), ["c", "b", "a"]);
    assert_eq!(desc.current_page(), 2);

    Ok(())
}

/// Tests sorting by a field that is not sortable.
///
/// Verifies that the request sort is echoed but rows keep insertion order.
///
/// Expected: Ok with insertion order
#[tokio::test]
async fn keeps_insertion_order_for_unknown_sort() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::category::create_categories(db, &["b", "a", "c"]).await?;

    let repo = CategoryRepository::new(db);
    let result = repo
        .search(&SearchParams::new(SearchParamsInput::new().sort("description")))
        .await?;

    assert_eq!(names(result.items()), ["b", "a", "c"]);
    assert_eq!(result.sort(), Some("description"));

    Ok(())
}

/// Tests that equal sort keys keep insertion order.
///
/// Expected: Ok with duplicates in insertion order for asc and desc
#[tokio::test]
async fn sort_is_stable_for_equal_names() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let rows = factory::category::create_categories(db, &["same", "other", "same"]).await?;

    let repo = CategoryRepository::new(db);

    for order in ["asc", "desc"] {
        let result = repo
            .search(&SearchParams::new(
                SearchParamsInput::new().sort("name").order(order),
            ))
            .await?;

        let same_ids: Vec<&str> = result
            .items()
            .iter()
            .filter(|c| c.name() == "same")
            .map(|c| c.id().as_str())
            .collect();
        assert_eq!(same_ids, [rows[0].id.as_str(), rows[2].id.as_str()]);
    }

    Ok(())
}

/// Tests requesting a page past the end.
///
/// Expected: Ok with no items, total 2, current page 6, last page 1
#[tokio::test]
async fn returns_empty_page_when_out_of_range() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::category::create_categories(db, &["a", "b"]).await?;

    let repo = CategoryRepository::new(db);
    let result = repo
        .search(&SearchParams::new(SearchParamsInput::new().page(6).limit(2)))
        .await?;

    assert!(result.items().is_empty());
    assert_eq!(result.total(), 2);
    assert_eq!(result.current_page(), 6);
    assert_eq!(result.last_page(), 1);

    Ok(())
}

/// Tests filtering with LIKE wildcard characters.
///
/// Verifies that `%`, `_` and `\` in the filter match only themselves.
///
/// Expected: Ok with only the names containing each character
#[tokio::test]
async fn treats_wildcards_in_filter_literally() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::category::create_categories(
        db,
        &["Movie", "Series", "100% Doc", "M_vie", "a\\b"],
    )
    .await?;

    let repo = CategoryRepository::new(db);
    let search = |filter: &'static str| {
        SearchParams::new(SearchParamsInput::new().filter(filter).sort("name"))
    };

    let percent = repo.search(&search("%")).await?;
    assert_eq!(names(percent.items()), ["100% Doc"]);
    assert_eq!(percent.total(), 1);

    let underscore = repo.search(&search("_")).await?;
    assert_eq!(names(underscore.items()), ["M_vie"]);

    let literal = repo.search(&search("M_vie")).await?;
    assert_eq!(names(literal.items()), ["M_vie"]);

    let backslash = repo.search(&search("\\")).await?;
    assert_eq!(names(backslash.items()), ["a\\b"]);

    Ok(())
}

/// Tests filtering names with non-ASCII letters.
///
/// Verifies that only ASCII letters fold case, so `É` and `é` differ.
///
/// Expected: Ok with exact-case matches for non-ASCII letters
#[tokio::test]
async fn folds_only_ascii_case() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::category::create_categories(db, &["Émile", "émile night"]).await?;

    let repo = CategoryRepository::new(db);

    let upper = repo
        .search(&SearchParams::new(SearchParamsInput::new().filter("É")))
        .await?;
    assert_eq!(names(upper.items()), ["Émile"]);

    let ascii = repo
        .search(&SearchParams::new(
            SearchParamsInput::new().filter("MILE").sort("name"),
        ))
        .await?;
    assert_eq!(names(ascii.items()), ["Émile", "émile night"]);

    Ok(())
}

/// Tests paging far past the end of the table.
///
/// Verifies that pages and limits at the largest accepted value do not
/// overflow the query and that larger values fall back to the defaults.
///
/// Expected: Ok with empty pages echoing the requested page, or default paging
#[tokio::test]
async fn handles_extreme_paging() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::category::create_categories(db, &["a", "b"]).await?;

    let repo = CategoryRepository::new(db);

    let far = repo
        .search(&SearchParams::new(SearchParamsInput::new().page(i64::MAX)))
        .await?;
    assert!(far.items().is_empty());
    assert_eq!(far.total(), 2);
    assert_eq!(far.current_page(), i64::MAX as u64);

    let wide = repo
        .search(&SearchParams::new(
            SearchParamsInput::new().limit(i64::MAX).page(3),
        ))
        .await?;
    assert!(wide.items().is_empty());
    assert_eq!(wide.limit(), i64::MAX as u64);
    assert_eq!(wide.last_page(), 1);

    let everything = repo
        .search(&SearchParams::new(SearchParamsInput::new().limit(i64::MAX)))
        .await?;
    assert_eq!(everything.items().len(), 2);

    let fallback = repo
        .search(&SearchParams::new(
            SearchParamsInput::new()
                .page("18446744073709551615")
                .limit("18446744073709551615"),
        ))
        .await?;
    assert_eq!(fallback.current_page(), 1);
    assert_eq!(fallback.limit(), 15);
    assert_eq!(fallback.items().len(), 2);

    Ok(())
}

/// Tests sorting by identifier.
///
/// Expected: Ok with ids in ascending string order
#[tokio::test]
async fn sorts_by_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let rows = factory::category::create_categories(db, &["a", "b", "c", "d"]).await?;
    let mut expected: Vec<&str> = rows.iter().map(|row| row.id.as_str()).collect();
    expected.sort();

    let repo = CategoryRepository::new(db);
    let result = repo
        .search(&SearchParams::new(SearchParamsInput::new().sort("id")))
        .await?;

    let ids: Vec<&str> = result.items().iter().map(|c| c.id().as_str()).collect();
    assert_eq!(ids, expected);

    Ok(())
}

/// Tests that the store-backed search matches the in-memory search.
///
/// Runs the same requests against both repositories over the same rows
/// and compares the returned ids and totals.
///
/// Expected: identical pages and totals
#[tokio::test]
async fn matches_in_memory_search() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::category::create_categories(
        db,
        &[
            "Movie",
            "movie night",
            "Series",
            "100% Doc",
            "Movie",
            "M_vie club",
            "back\\slash",
            "Émile",
            "émile night",
            "Anime",
            "series b",
        ],
    )
    .await?;

    let repo = CategoryRepository::new(db);
    let memory = CategoryInMemoryRepository::with_items(
        crate::data::category::CategorySearch,
        repo.find_all().await?,
    );

    let requests = [
        SearchParamsInput::new(),
        SearchParamsInput::new().filter("movie").limit(2),
        SearchParamsInput::new().sort("name").order("desc").limit(3).page(2),
        SearchParamsInput::new().sort("created_at").filter("s"),
        SearchParamsInput::new().sort("unknown").limit(4).page(2),
        SearchParamsInput::new().sort("id").order("desc").limit(5),
        SearchParamsInput::new().filter("_"),
        SearchParamsInput::new().filter("%"),
        SearchParamsInput::new().filter("M_vie"),
        SearchParamsInput::new().filter("\\"),
        SearchParamsInput::new().filter("É"),
        SearchParamsInput::new().filter("ÉMILE"),
        SearchParamsInput::new().filter("MILE"),
        SearchParamsInput::new().page(i64::MAX),
        SearchParamsInput::new().limit(i64::MAX).page(2),
        SearchParamsInput::new().limit(i64::MAX).page(3),
        SearchParamsInput::new().page("18446744073709551615"),
        SearchParamsInput::new().limit("18446744073709551615"),
    ];

    for input in requests {
        let params = SearchParams::new(input);
        let stored = repo.search(&params).await?;
        let in_memory = memory.search(&params).await?;

        let stored_ids: Vec<&str> = stored.items().iter().map(|c| c.id().as_str()).collect();
        let memory_ids: Vec<&str> = in_memory
            .items()
            .iter()
            .map(|c| c.id().as_str())
            .collect();
        assert_eq!(stored_ids, memory_ids, "request {params:?}");
        assert_eq!(stored.total(), in_memory.total());
        assert_eq!(stored.current_page(), in_memory.current_page());
        assert_eq!(stored.last_page(), in_memory.last_page());
    }

    Ok(())
}

/// Tests the allow-list of sortable fields.
///
/// Expected: id, name and created_at
#[tokio::test]
async fn exposes_sortable_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);

    assert_eq!(repo.sortable_fields(), ["id", "name", "created_at"]);

    Ok(())
}
