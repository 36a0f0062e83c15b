use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::shipping::application::domain::entities::ShippingAddress;
use crate::modules::shipping::application::ports::{
    incoming::use_cases::{
        GetShippingAddressError, GetShippingAddressUseCase, ListShippingAddressesError,
        ListShippingAddressesUseCase,
    },
    outgoing::ShippingAddressQuery,
};

#[derive(Debug, Clone)]
pub struct ListShippingAddressesService<Q>
where
    Q: ShippingAddressQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListShippingAddressesService<Q>
where
    Q: ShippingAddressQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListShippingAddressesUseCase for ListShippingAddressesService<Q>
where
    Q: ShippingAddressQuery + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
    ) -> Result<Vec<ShippingAddress>, ListShippingAddressesError> {
        self.query
            .list_for_user(user_id)
            .await
            .map_err(|e| ListShippingAddressesError::QueryError(e.to_string()))
    }
}

#[derive(Debug, Clone)]
pub struct GetShippingAddressService<Q>
where
    Q: ShippingAddressQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetShippingAddressService<Q>
where
    Q: ShippingAddressQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetShippingAddressUseCase for GetShippingAddressService<Q>
where
    Q: ShippingAddressQuery + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        address_id: Uuid,
    ) -> Result<ShippingAddress, GetShippingAddressError> {
        self.query
            .find_for_user(user_id, address_id)
            .await
            .map_err(|e| GetShippingAddressError::QueryError(e.to_string()))?
            .ok_or(GetShippingAddressError::NotFound)
    }
}
