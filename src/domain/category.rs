//! Category aggregate.
//!
//! A category is created through [`Category::create`] (fresh identity) or
//! [`Category::restore`] (known identity, e.g. when loading from storage) and
//! afterwards only changes through its own operations. Every construction and
//! every `update` runs the category validator; a failed update leaves the
//! category untouched.

use chrono::{DateTime, Utc};
use sea_orm::ActiveValue;
use serde::Serialize;

use crate::{
    domain::{entity::Entity, identity::EntityId},
    error::{validation::EntityValidationError, AppError},
    model::category::CategoryDto,
    validation::{category::CategoryValidator, Validator},
};

/// Properties a category is built from.
///
/// `is_active` defaults to `true` and `created_at` to the current time.
#[derive(Debug, Clone, Default)]
pub struct CategoryProps {
    pub name: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
}

impl CategoryProps {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Category {
    id: EntityId,
    name: String,
    description: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl Category {
    /// Creates a new category with a generated identity.
    ///
    /// # Returns
    /// - `Ok(Category)` - Props passed validation
    /// - `Err(EntityValidationError)` - Error tree for each invalid property
    pub fn create(props: CategoryProps) -> Result<Self, EntityValidationError> {
        Self::restore(EntityId::new(), props)
    }

    /// Builds a category with a known identity.
    pub fn restore(id: EntityId, props: CategoryProps) -> Result<Self, EntityValidationError> {
        let props = CategoryValidator
            .validate(props)
            .map_err(EntityValidationError::new)?;

        Ok(Self {
            id,
            name: props.name,
            description: props.description,
            is_active: props.is_active.unwrap_or(true),
            created_at: props.created_at.unwrap_or_else(Utc::now),
        })
    }

    /// Replaces name and description after validating them.
    pub fn update(
        &mut self,
        name: impl Into<String>,
        description: Option<String>,
    ) -> Result<(), EntityValidationError> {
        let props = CategoryValidator
            .validate(CategoryProps {
                name: name.into(),
                description,
                is_active: Some(self.is_active),
                created_at: Some(self.created_at),
            })
            .map_err(EntityValidationError::new)?;

        self.name = props.name;
        self.description = props.description;

        Ok(())
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Converts a stored row into the domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Category)` - Row holds a valid identity and valid properties
    /// - `Err(AppError::InvalidId)` - Stored id is not a UUID v4
    /// - `Err(AppError::Validation)` - Stored properties violate category rules
    pub fn from_entity(model: entity::category::Model) -> Result<Self, AppError> {
        let id = EntityId::parse(&model.id)?;

        Ok(Self::restore(
            id,
            CategoryProps {
                name: model.name,
                description: model.description,
                is_active: Some(model.is_active),
                created_at: Some(model.created_at),
            },
        )?)
    }

    /// Converts the domain model into a fully set active model for insert or update.
    pub fn to_active_model(&self) -> entity::category::ActiveModel {
        entity::category::ActiveModel {
            id: ActiveValue::Set(self.id.to_string()),
            name: ActiveValue::Set(self.name.clone()),
            description: ActiveValue::Set(self.description.clone()),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(self.created_at),
        }
    }

    /// Converts domain model to DTO for output.
    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            id: self.id.into(),
            name: self.name,
            description: self.description,
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }
}

impl Entity for Category {
    const NAME: &'static str = "Category";

    fn entity_id(&self) -> &EntityId {
        &self.id
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity_as(other)
    }
}

impl Eq for Category {}
