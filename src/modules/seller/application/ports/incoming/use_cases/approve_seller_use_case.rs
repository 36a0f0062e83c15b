use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::seller::application::domain::entities::Seller;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ApproveSellerError {
    #[error("Seller not found")]
    SellerNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Staff toggle of a seller's approval flag.
#[async_trait]
pub trait ApproveSellerUseCase: Send + Sync {
    async fn execute(&self, seller_id: Uuid, approved: bool) -> Result<Seller, ApproveSellerError>;
}
