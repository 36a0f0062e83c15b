use async_trait::async_trait;

use crate::modules::seller::application::domain::entities::Seller;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteProductError {
    #[error("Product does not exist!")]
    ProductNotFound,

    #[error("Access is denied")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Soft-deletes one of the seller's own products.
#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    async fn execute(&self, seller: &Seller, slug: &str) -> Result<(), DeleteProductError>;
}
