use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::shipping::application::domain::entities::{AddressFields, ShippingAddress};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ShippingAddressRepositoryError {
    #[error("Shipping address not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ShippingAddressRepository: Send + Sync {
    async fn create(
        &self,
        user_id: UserId,
        fields: AddressFields,
    ) -> Result<ShippingAddress, ShippingAddressRepositoryError>;

    /// Overwrites every field of the user's record.
    async fn update(
        &self,
        user_id: UserId,
        address_id: Uuid,
        fields: AddressFields,
    ) -> Result<ShippingAddress, ShippingAddressRepositoryError>;

    async fn delete(
        &self,
        user_id: UserId,
        address_id: Uuid,
    ) -> Result<(), ShippingAddressRepositoryError>;
}
