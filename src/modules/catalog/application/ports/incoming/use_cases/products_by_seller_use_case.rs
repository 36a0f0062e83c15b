use async_trait::async_trait;

use crate::modules::catalog::application::ports::outgoing::ProductView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProductsBySellerError {
    #[error("Seller does not exist!")]
    SellerNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ProductsBySellerUseCase: Send + Sync {
    async fn execute(&self, seller_slug: &str) -> Result<Vec<ProductView>, ProductsBySellerError>;
}
