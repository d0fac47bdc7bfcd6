use super::*;

/// Tests deleting a stored category.
///
/// Expected: Ok and the category can no longer be found
#[tokio::test]
async fn deletes_category() -> Result<(), AppError> {
    let category = category_at("Movie", 0);
    let id = category.id().to_string();
    let service = in_memory_service(vec![category, category_at("Series", 1)]);

    service.delete(&id).await?;

    assert!(matches!(service.get(&id).await, Err(AppError::NotFound(_))));
    assert_eq!(service.list(SearchParamsInput::new()).await?.total, 1);

    Ok(())
}

/// Tests deleting with a malformed or unknown id.
///
/// Expected: Err(AppError::InvalidId) and Err(AppError::NotFound)
#[tokio::test]
async fn rejects_malformed_or_missing_id() -> Result<(), AppError> {
    let service = in_memory_service(Vec::new());

    assert!(matches!(
        service.delete("1").await,
        Err(AppError::InvalidId(_))
    ));
    assert!(matches!(
        service.delete(EntityId::new().as_str()).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
