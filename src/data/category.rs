use async_trait::async_trait;
use sea_orm::{
    sea_query::{Expr, LikeExpr},
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::{
    data::{
        in_memory::InMemoryRepository,
        searchable::{self, Searchable},
        Repository, SearchableRepository,
    },
    domain::{
        category::Category,
        entity::Entity,
        identity::EntityId,
        search::{SearchParams, SearchResult, SortDirection, SortKey},
    },
    error::AppError,
};

/// How categories are filtered and sorted.
///
/// Filter is a substring match on the name that ignores ASCII case, the same
/// folding SQLite `LIKE` applies. Without a requested sort, newest categories
/// come first.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategorySearch;

impl Searchable<Category> for CategorySearch {
    fn sortable_fields(&self) -> &'static [&'static str] {
        &["id", "name", "created_at"]
    }

    fn matches(&self, item: &Category, filter: &str) -> bool {
        item.name()
            .to_ascii_lowercase()
            .contains(&filter.to_ascii_lowercase())
    }

    fn sort_key(&self, item: &Category, field: &str) -> Option<SortKey> {
        match field {
            "id" => Some(SortKey::Id(item.id().as_str().to_string())),
            "name" => Some(SortKey::Text(item.name().to_string())),
            "created_at" => Some(SortKey::Date(item.created_at())),
            _ => None,
        }
    }

    fn default_sort(&self) -> Option<(&'static str, SortDirection)> {
        Some(("created_at", SortDirection::Desc))
    }
}

pub type CategoryInMemoryRepository = InMemoryRepository<Category, CategorySearch>;

pub struct CategoryRepository<'a> {
    db: &'a DatabaseConnection,
    searchable: CategorySearch,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            searchable: CategorySearch,
        }
    }
}

/// Maps a sortable field name to its column.
fn sort_column(field: &str) -> Option<entity::category::Column> {
    match field {
        "id" => Some(entity::category::Column::Id),
        "name" => Some(entity::category::Column::Name),
        "created_at" => Some(entity::category::Column::CreatedAt),
        _ => None,
    }
}

/// `LIKE` pattern matching `filter` anywhere, with `\`, `%` and `_` taken
/// literally.
fn contains_pattern(filter: &str) -> LikeExpr {
    let mut pattern = String::with_capacity(filter.len() + 2);
    pattern.push('%');
    for c in filter.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');

    LikeExpr::new(pattern).escape('\\')
}

fn sql_order(direction: SortDirection) -> Order {
    match direction {
        SortDirection::Asc => Order::Asc,
        SortDirection::Desc => Order::Desc,
    }
}

#[async_trait]
impl Repository<Category> for CategoryRepository<'_> {
    async fn insert(&self, category: &Category) -> Result<(), AppError> {
        category.to_active_model().insert(self.db).await?;

        Ok(())
    }

    async fn bulk_insert(&self, categories: &[Category]) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        for category in categories {
            category.to_active_model().insert(&txn).await?;
        }

        txn.commit().await?;

        Ok(())
    }

    async fn update(&self, category: &Category) -> Result<(), AppError> {
        let existing = entity::prelude::Category::find_by_id(category.id().as_str())
            .one(self.db)
            .await?;

        if existing.is_none() {
            return Err(AppError::not_found(Category::NAME, category.id()));
        }

        category.to_active_model().update(self.db).await?;

        Ok(())
    }

    async fn delete(&self, id: &EntityId) -> Result<(), AppError> {
        let result = entity::prelude::Category::delete_by_id(id.as_str())
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found(Category::NAME, id));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &EntityId) -> Result<Category, AppError> {
        let model = entity::prelude::Category::find_by_id(id.as_str())
            .one(self.db)
            .await?
            .ok_or_else(|| AppError::not_found(Category::NAME, id))?;

        Category::from_entity(model)
    }

    async fn find_all(&self) -> Result<Vec<Category>, AppError> {
        entity::prelude::Category::find()
            .order_by(Expr::cust("rowid"), Order::Asc)
            .all(self.db)
            .await?
            .into_iter()
            .map(Category::from_entity)
            .collect()
    }
}

#[async_trait]
impl SearchableRepository<Category> for CategoryRepository<'_> {
    fn sortable_fields(&self) -> &'static [&'static str] {
        self.searchable.sortable_fields()
    }

    /// Runs filter, sort and pagination as SQL.
    ///
    /// A page whose offset does not fit a signed 64-bit `OFFSET` is past the
    /// end of any table and comes back empty without being fetched.
    async fn search(&self, params: &SearchParams) -> Result<SearchResult<Category>, AppError> {
        let mut query = entity::prelude::Category::find();

        if let Some(filter) = params.filter() {
            query = query.filter(entity::category::Column::Name.like(contains_pattern(filter)));
        }

        let (sort, order) = searchable::resolve_sort::<Category, _>(params, &self.searchable);
        if let Some(column) = sort
            .filter(|field| searchable::is_sortable(self.searchable.sortable_fields(), field))
            .and_then(sort_column)
        {
            query = query.order_by(column, sql_order(order.unwrap_or(SortDirection::Asc)));
        }
        // Equal keys and unsorted requests keep insertion order
        query = query.order_by(Expr::cust("rowid"), Order::Asc);

        let paginator = query.paginate(self.db, params.limit());
        let total = paginator.num_items().await?;
        let models = match params.offset().filter(|offset| i64::try_from(*offset).is_ok()) {
            Some(_) => paginator.fetch_page(params.page() - 1).await?,
            None => Vec::new(),
        };

        tracing::debug!(
            total,
            page = params.page(),
            limit = params.limit(),
            returned = models.len(),
            "Category search completed"
        );

        let items = models
            .into_iter()
            .map(Category::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(searchable::into_result(items, total, params)?)
    }
}
