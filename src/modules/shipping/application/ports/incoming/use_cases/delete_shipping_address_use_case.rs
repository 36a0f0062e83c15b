use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteShippingAddressError {
    #[error("Shipping address does not exist!")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Removes the record for good; placed orders keep their own copy.
#[async_trait]
pub trait DeleteShippingAddressUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        address_id: Uuid,
    ) -> Result<(), DeleteShippingAddressError>;
}
