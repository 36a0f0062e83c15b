use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::shipping::application::domain::entities::ShippingAddress;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListShippingAddressesError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListShippingAddressesUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
    ) -> Result<Vec<ShippingAddress>, ListShippingAddressesError>;
}
