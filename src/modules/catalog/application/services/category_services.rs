use async_trait::async_trait;
use tracing::info;

use crate::modules::catalog::application::{
    domain::entities::Category,
    ports::{
        incoming::use_cases::{
            CreateCategoryCommand, CreateCategoryError, CreateCategoryUseCase,
            ListCategoriesError, ListCategoriesUseCase,
        },
        outgoing::{CategoryQuery, CategoryRepository, CategoryRepositoryError, CreateCategoryData},
    },
};
use crate::shared::slug::unique_slug;

//
// ──────────────────────────────────────────────────────────
// List
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct ListCategoriesService<Q>
where
    Q: CategoryQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListCategoriesService<Q>
where
    Q: CategoryQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListCategoriesUseCase for ListCategoriesService<Q>
where
    Q: CategoryQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Category>, ListCategoriesError> {
        self.query
            .list()
            .await
            .map_err(|e| ListCategoriesError::QueryError(e.to_string()))
    }
}

//
// ──────────────────────────────────────────────────────────
// Create
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateCategoryService<Q, R>
where
    Q: CategoryQuery + Send + Sync,
    R: CategoryRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> CreateCategoryService<Q, R>
where
    Q: CategoryQuery + Send + Sync,
    R: CategoryRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> CreateCategoryUseCase for CreateCategoryService<Q, R>
where
    Q: CategoryQuery + Send + Sync,
    R: CategoryRepository + Send + Sync,
{
    async fn execute(&self, command: CreateCategoryCommand) -> Result<Category, CreateCategoryError> {
        let query = &self.query;
        let slug = unique_slug(command.name(), |candidate| async move {
            query.slug_taken(&candidate).await
        })
        .await
        .map_err(|e| CreateCategoryError::SlugUnavailable(e.to_string()))?;

        let category = self
            .repository
            .create_category(CreateCategoryData {
                name: command.name().to_string(),
                slug,
                image: command.image().to_string(),
            })
            .await
            .map_err(|e| match e {
                CategoryRepositoryError::AlreadyExists => CreateCategoryError::AlreadyExists,
                other => CreateCategoryError::RepositoryError(other.to_string()),
            })?;

        info!(slug = %category.slug, "Category created");

        Ok(category)
    }
}
