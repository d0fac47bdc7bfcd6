use super::*;

/// Tests finding a stored category by id.
///
/// Verifies that the stored row is converted back into the domain model
/// with all of its properties.
///
/// Expected: Ok(Category)
#[tokio::test]
async fn finds_category_by_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let row = factory::category::CategoryFactory::new(db)
        .name("Documentary")
        .description("real stories")
        .build()
        .await?;

    let repo = CategoryRepository::new(db);
    let id = EntityId::parse(&row.id)?;
    let category = repo.find_by_id(&id).await?;

    assert_eq!(category.id(), &id);
    assert_eq!(category.name(), "Documentary");
    assert_eq!(category.description(), Some("real stories"));
    assert!(category.is_active());
    assert_eq!(category.created_at(), fixture::category::default_created_at());

    Ok(())
}

/// Tests finding a category that does not exist.
///
/// Verifies that the error names the entity and the id that was looked up.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn returns_not_found_for_missing_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let id = EntityId::new();
    let result = repo.find_by_id(&id).await;

    match result {
        Err(AppError::NotFound(message)) => {
            assert_eq!(message, format!("Category not found using id {id}"));
        }
        other => panic!("expected not found, got {other:?}"),
    }

    Ok(())
}
