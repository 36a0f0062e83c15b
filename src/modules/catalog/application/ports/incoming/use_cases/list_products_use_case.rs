use async_trait::async_trait;

use crate::modules::catalog::application::ports::outgoing::{ProductFilter, ProductView};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListProductsError {
    #[error("Minimum price is greater than maximum price")]
    InvalidPriceRange,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListProductsUseCase: Send + Sync {
    async fn execute(&self, filter: ProductFilter) -> Result<Vec<ProductView>, ListProductsError>;
}
