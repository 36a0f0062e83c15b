use async_trait::async_trait;

use crate::modules::catalog::application::domain::entities::Category;

#[derive(Debug, Clone)]
pub struct CreateCategoryData {
    pub name: String,
    pub slug: String,
    pub image: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CategoryRepositoryError {
    /// Unique name or slug violated at INSERT time.
    #[error("Category already exists")]
    AlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn create_category(
        &self,
        data: CreateCategoryData,
    ) -> Result<Category, CategoryRepositoryError>;
}
