use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    data::{
        searchable::{self, Searchable},
        Repository, SearchableRepository,
    },
    domain::{
        entity::Entity,
        identity::EntityId,
        search::{SearchParams, SearchResult},
    },
    error::AppError,
};

/// Repository over a process-local list, kept in insertion order.
///
/// Each operation holds the lock only for its own duration. A search copies
/// the stored items under a read lock and runs the pipeline on that snapshot,
/// so a concurrent write is either fully visible to it or not at all.
pub struct InMemoryRepository<E, S> {
    items: RwLock<Vec<E>>,
    searchable: S,
}

impl<E: Entity, S: Searchable<E>> InMemoryRepository<E, S> {
    pub fn new(searchable: S) -> Self {
        Self::with_items(searchable, Vec::new())
    }

    /// Creates a repository seeded with `items`.
    pub fn with_items(searchable: S, items: Vec<E>) -> Self {
        Self {
            items: RwLock::new(items),
            searchable,
        }
    }

    /// Number of stored items.
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    fn position(items: &[E], id: &EntityId) -> Option<usize> {
        items.iter().position(|item| item.entity_id() == id)
    }
}

impl<E: Entity, S: Searchable<E> + Default> Default for InMemoryRepository<E, S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

#[async_trait]
impl<E, S> Repository<E> for InMemoryRepository<E, S>
where
    E: Entity,
    S: Searchable<E>,
{
    async fn insert(&self, entity: &E) -> Result<(), AppError> {
        self.items.write().await.push(entity.clone());
        Ok(())
    }

    async fn bulk_insert(&self, entities: &[E]) -> Result<(), AppError> {
        self.items.write().await.extend_from_slice(entities);
        Ok(())
    }

    async fn update(&self, entity: &E) -> Result<(), AppError> {
        let mut items = self.items.write().await;

        let index = Self::position(&items, entity.entity_id())
            .ok_or_else(|| AppError::not_found(E::NAME, entity.entity_id()))?;
        items[index] = entity.clone();

        Ok(())
    }

    async fn delete(&self, id: &EntityId) -> Result<(), AppError> {
        let mut items = self.items.write().await;

        let index = Self::position(&items, id).ok_or_else(|| AppError::not_found(E::NAME, id))?;
        items.remove(index);

        Ok(())
    }

    async fn find_by_id(&self, id: &EntityId) -> Result<E, AppError> {
        let items = self.items.read().await;

        Self::position(&items, id)
            .map(|index| items[index].clone())
            .ok_or_else(|| AppError::not_found(E::NAME, id))
    }

    async fn find_all(&self) -> Result<Vec<E>, AppError> {
        Ok(self.items.read().await.clone())
    }
}

#[async_trait]
impl<E, S> SearchableRepository<E> for InMemoryRepository<E, S>
where
    E: Entity,
    S: Searchable<E>,
{
    fn sortable_fields(&self) -> &'static [&'static str] {
        self.searchable.sortable_fields()
    }

    async fn search(&self, params: &SearchParams) -> Result<SearchResult<E>, AppError> {
        let snapshot = self.find_all().await?;

        Ok(searchable::search(snapshot, params, &self.searchable)?)
    }
}
