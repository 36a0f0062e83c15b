use async_trait::async_trait;

use crate::modules::catalog::application::ports::outgoing::ProductView;
use crate::modules::seller::application::domain::entities::Seller;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListSellerProductsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListSellerProductsUseCase: Send + Sync {
    async fn execute(&self, seller: &Seller) -> Result<Vec<ProductView>, ListSellerProductsError>;
}
