//! Repository layer.
//!
//! [`Repository`] is the storage contract the use cases depend on and
//! [`SearchableRepository`] adds paginated search on top of it. Two families of
//! implementations exist: the generic [`in_memory::InMemoryRepository`] and
//! the SeaORM-backed repositories (currently [`category::CategoryRepository`]).
//! Both run the same filter → sort → paginate contract from [`searchable`];
//! the store-backed variant pushes each stage down into SQL.

pub mod category;
pub mod in_memory;
pub mod searchable;


use async_trait::async_trait;

use crate::{
    domain::{
        entity::Entity,
        identity::EntityId,
        search::{SearchParams, SearchResult},
    },
    error::AppError,
};

/// Minimal persistence contract for an entity type.
///
/// Lookups and mutations of a missing id fail with `AppError::NotFound`.
/// Store failures propagate unchanged as `AppError::DbErr`.
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    async fn insert(&self, entity: &E) -> Result<(), AppError>;

    /// Inserts all entities, or none of them when one insert fails.
    async fn bulk_insert(&self, entities: &[E]) -> Result<(), AppError>;

    /// Replaces the stored entity with the same identity.
    async fn update(&self, entity: &E) -> Result<(), AppError>;

    async fn delete(&self, id: &EntityId) -> Result<(), AppError>;

    async fn find_by_id(&self, id: &EntityId) -> Result<E, AppError>;

    /// Returns every entity in insertion order.
    async fn find_all(&self) -> Result<Vec<E>, AppError>;
}

/// Repository able to run a paginated search.
#[async_trait]
pub trait SearchableRepository<E: Entity>: Repository<E> {
    /// Field names accepted as `sort`; any other sort leaves order unchanged.
    fn sortable_fields(&self) -> &'static [&'static str];

    /// Filters, sorts and paginates the stored entities, in that order.
    async fn search(&self, params: &SearchParams) -> Result<SearchResult<E>, AppError>;
}
