//! Category fixtures for creating in-memory test data.

use chrono::{DateTime, TimeZone, Utc};
use entity::category;

/// Default test category id, a valid UUID v4.
pub const DEFAULT_ID: &str = "8f4b7a1e-3c2d-4e5f-9a6b-7c8d9e0f1a2b";

/// Default test category name.
pub const DEFAULT_NAME: &str = "Movie";

/// Default creation time of fixture categories.
pub fn default_created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Creates a category entity model with default values.
///
/// # Default Values
/// - id: `DEFAULT_ID`
/// - name: `"Movie"`
/// - description: `None`
/// - is_active: `true`
/// - created_at: `2024-01-01T00:00:00Z`
pub fn entity() -> category::Model {
    category::Model {
        id: DEFAULT_ID.to_string(),
        name: DEFAULT_NAME.to_string(),
        description: None,
        is_active: true,
        created_at: default_created_at(),
    }
}

/// Creates a category entity builder for customization.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let category = fixture::category::entity_builder()
///     .name("Documentary")
///     .description("real stories")
///     .build();
/// ```
pub fn entity_builder() -> CategoryEntityBuilder {
    CategoryEntityBuilder { entity: entity() }
}

/// Builder for category fixtures.
pub struct CategoryEntityBuilder {
    entity: category::Model,
}

impl CategoryEntityBuilder {
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

    pub fn build(self) -> category::Model {
        self.entity
    }
}
