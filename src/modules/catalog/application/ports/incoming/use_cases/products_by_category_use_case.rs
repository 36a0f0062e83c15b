use async_trait::async_trait;

use crate::modules::catalog::application::ports::outgoing::ProductView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProductsByCategoryError {
    #[error("Category does not exist!")]
    CategoryNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ProductsByCategoryUseCase: Send + Sync {
    async fn execute(&self, category_slug: &str)
        -> Result<Vec<ProductView>, ProductsByCategoryError>;
}
