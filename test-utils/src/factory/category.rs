//! Category factory for creating test category rows.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::{next_id, next_uuid, seconds_after};
use crate::fixture;

/// Factory for creating test categories with customizable fields.
///
/// Defaults come from `fixture::category::entity()` with a fresh UUID v4 id and
/// a unique name, so several categories can be created in one test.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::category::CategoryFactory;
///
/// let category = CategoryFactory::new(&db)
///     .name("Documentary")
///     .description("real stories")
///     .build()
///     .await?;
/// ```
pub struct CategoryFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::category::Model,
}

impl<'a> CategoryFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let entity = fixture::category::entity_builder()
            .id(next_uuid())
            .name(format!("Category {}", next_id()))
            .build();

        Self { db, entity }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.entity.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.entity.description = Some(description.into());
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.entity.is_active = is_active;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.entity.created_at = created_at;
        self
    }

    /// Builds and inserts the category row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::category::Model)` - Created category row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::category::Model, DbErr> {
        entity::category::ActiveModel {
            id: ActiveValue::Set(self.entity.id),
            name: ActiveValue::Set(self.entity.name),
            description: ActiveValue::Set(self.entity.description),
            is_active: ActiveValue::Set(self.entity.is_active),
            created_at: ActiveValue::Set(self.entity.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a category with default values.
///
/// Shorthand for `CategoryFactory::new(db).build().await`.
pub async fn create_category(db: &DatabaseConnection) -> Result<entity::category::Model, DbErr> {
    CategoryFactory::new(db).build().await
}

/// Creates one category per name, in order, one second apart.
///
/// # Arguments
/// - `db` - Database connection
/// - `names` - Category names in insertion order
///
/// # Returns
/// - `Ok(Vec<entity::category::Model>)` - Created rows in insertion order
/// - `Err(DbErr)` - Database error during insert
pub async fn create_categories(
    db: &DatabaseConnection,
    names: &[&str],
) -> Result<Vec<entity::category::Model>, DbErr> {
    let base = fixture::category::default_created_at();
    let mut created = Vec::with_capacity(names.len());

    for (offset, name) in (0_i64..).zip(names) {
        let category = CategoryFactory::new(db)
            .name(*name)
            .created_at(seconds_after(base, offset))
            .build()
            .await?;
        created.push(category);
    }

    Ok(created)
}
