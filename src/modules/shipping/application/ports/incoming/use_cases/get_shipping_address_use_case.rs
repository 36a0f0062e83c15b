use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::shipping::application::domain::entities::ShippingAddress;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetShippingAddressError {
    #[error("Shipping address does not exist!")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetShippingAddressUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        address_id: Uuid,
    ) -> Result<ShippingAddress, GetShippingAddressError>;
}
