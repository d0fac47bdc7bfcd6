use crate::{
    data::SearchableRepository,
    domain::{
        category::{Category, CategoryProps},
        identity::EntityId,
        search::SearchParams,
    },
    error::AppError,
    model::{
        category::{CategoryDto, CreateCategoryDto, UpdateCategoryDto},
        pagination::PaginationOutputDto,
        search::SearchParamsInput,
    },
};

pub struct CategoryService<R> {
    repo: R,
}

impl<R: SearchableRepository<Category>> CategoryService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates and stores a new category
    pub async fn create(&self, input: CreateCategoryDto) -> Result<CategoryDto, AppError> {
        let category = Category::create(CategoryProps {
            name: input.name,
            description: input.description,
            is_active: input.is_active,
            created_at: None,
        })?;

        self.repo.insert(&category).await?;

        tracing::info!("Created category {} ({})", category.id(), category.name());

        Ok(category.into_dto())
    }

    /// Gets a category by its id string
    ///
    /// # Returns
    /// - `Ok(CategoryDto)` - Category exists
    /// - `Err(AppError::InvalidId)` - `id` is not a UUID v4
    /// - `Err(AppError::NotFound)` - No category with that id
    pub async fn get(&self, id: &str) -> Result<CategoryDto, AppError> {
        let id = EntityId::parse(id)?;

        let category = self.repo.find_by_id(&id).await?;

        Ok(category.into_dto())
    }

    /// Searches categories; malformed paging, sort or filter input falls back to defaults
    pub async fn list(
        &self,
        input: SearchParamsInput,
    ) -> Result<PaginationOutputDto<CategoryDto>, AppError> {
        let params = SearchParams::new(input);

        let result = self.repo.search(&params).await?;

        Ok(result.into_dto(Category::into_dto))
    }

    /// Updates name and description, and toggles the active flag when given
    pub async fn update(&self, input: UpdateCategoryDto) -> Result<CategoryDto, AppError> {
        let id = EntityId::parse(&input.id)?;

        let mut category = self.repo.find_by_id(&id).await?;

        category.update(input.name, input.description)?;
        match input.is_active {
            Some(true) => category.activate(),
            Some(false) => category.deactivate(),
            None => {}
        }

        self.repo.update(&category).await?;

        tracing::info!("Updated category {}", category.id());

        Ok(category.into_dto())
    }

    /// Deletes a category by its id string
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let id = EntityId::parse(id)?;

        self.repo.delete(&id).await?;

        tracing::info!("Deleted category {}", id);

        Ok(())
    }
}
