use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::seller::application::domain::entities::Seller;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResolveSellerError {
    #[error("User has no seller profile")]
    NotASeller,

    #[error("Seller is not approved")]
    NotApproved,

    #[error("Query error: {0}")]
    QueryError(String),
}

/// Gate in front of every seller-area operation: resolves the caller's
/// seller record and requires it to be approved.
#[async_trait]
pub trait ResolveSellerUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<Seller, ResolveSellerError>;
}
