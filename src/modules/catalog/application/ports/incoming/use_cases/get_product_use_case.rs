use async_trait::async_trait;

use crate::modules::catalog::application::ports::outgoing::ProductView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProductError {
    #[error("Product does not exist!")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetProductUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<ProductView, GetProductError>;
}
