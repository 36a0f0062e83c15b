use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::shipping::application::domain::entities::{AddressFields, ShippingAddress};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ShippingAddressQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Every lookup is scoped to the owning user.
#[async_trait]
pub trait ShippingAddressQuery: Send + Sync {
    async fn list_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<ShippingAddress>, ShippingAddressQueryError>;

    async fn find_for_user(
        &self,
        user_id: UserId,
        address_id: Uuid,
    ) -> Result<Option<ShippingAddress>, ShippingAddressQueryError>;

    /// A record of this user whose every field equals `fields`.
    async fn find_identical(
        &self,
        user_id: UserId,
        fields: &AddressFields,
    ) -> Result<Option<ShippingAddress>, ShippingAddressQueryError>;
}
