use super::*;

/// Tests inserting a new category.
///
/// Verifies that the repository stores every property of the category
/// under its identity.
///
/// Expected: Ok with row stored
#[tokio::test]
async fn inserts_category_successfully() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = Category::create(CategoryProps {
        description: Some("some description".to_string()),
        is_active: Some(false),
        ..CategoryProps::new("Movie")
    })?;

    let repo = CategoryRepository::new(db);
    repo.insert(&category).await?;

    let row = entity::prelude::Category::find_by_id(category.id().as_str())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(row.name, "Movie");
    assert_eq!(row.description.as_deref(), Some("some description"));
    assert!(!row.is_active);
    assert_eq!(row.created_at, category.created_at());

    Ok(())
}

/// Tests inserting a category whose id is already stored.
///
/// Verifies that the primary key constraint error from the store is passed
/// through unchanged.
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn fails_for_duplicate_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = Category::create(CategoryProps::new("Movie"))?;

    let repo = CategoryRepository::new(db);
    repo.insert(&category).await?;
    let result = repo.insert(&category).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
