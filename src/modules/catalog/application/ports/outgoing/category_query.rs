use async_trait::async_trait;

use crate::modules::catalog::application::domain::entities::Category;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CategoryQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CategoryQuery: Send + Sync {
    /// All categories ordered by name.
    async fn list(&self) -> Result<Vec<Category>, CategoryQueryError>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, CategoryQueryError>;

    async fn slug_taken(&self, slug: &str) -> Result<bool, CategoryQueryError>;
}
