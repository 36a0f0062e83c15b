use async_trait::async_trait;

use crate::modules::catalog::application::domain::entities::Category;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListCategoriesError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListCategoriesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Category>, ListCategoriesError>;
}
