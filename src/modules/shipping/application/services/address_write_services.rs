use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::shipping::application::domain::entities::ShippingAddress;
use crate::modules::shipping::application::ports::{
    incoming::use_cases::{
        DeleteShippingAddressError, DeleteShippingAddressUseCase, UpdateShippingAddressCommand,
        UpdateShippingAddressError, UpdateShippingAddressUseCase,
    },
    outgoing::{ShippingAddressQuery, ShippingAddressRepository, ShippingAddressRepositoryError},
};

#[derive(Debug, Clone)]
pub struct UpdateShippingAddressService<Q, R>
where
    Q: ShippingAddressQuery + Send + Sync,
    R: ShippingAddressRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateShippingAddressService<Q, R>
where
    Q: ShippingAddressQuery + Send + Sync,
    R: ShippingAddressRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> UpdateShippingAddressUseCase for UpdateShippingAddressService<Q, R>
where
    Q: ShippingAddressQuery + Send + Sync,
    R: ShippingAddressRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        address_id: Uuid,
        command: UpdateShippingAddressCommand,
    ) -> Result<ShippingAddress, UpdateShippingAddressError> {
        let current = self
            .query
            .find_for_user(user_id, address_id)
            .await
            .map_err(|e| UpdateShippingAddressError::RepositoryError(e.to_string()))?
            .ok_or(UpdateShippingAddressError::NotFound)?;

        if command.patch().is_empty() {
            return Ok(current);
        }

        let fields = current.fields().patched(command.into_patch());

        self.repository
            .update(user_id, address_id, fields)
            .await
            .map_err(|e| match e {
                ShippingAddressRepositoryError::NotFound => UpdateShippingAddressError::NotFound,
                other => UpdateShippingAddressError::RepositoryError(other.to_string()),
            })
    }
}

#[derive(Debug, Clone)]
pub struct DeleteShippingAddressService<R>
where
    R: ShippingAddressRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteShippingAddressService<R>
where
    R: ShippingAddressRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteShippingAddressUseCase for DeleteShippingAddressService<R>
where
    R: ShippingAddressRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        address_id: Uuid,
    ) -> Result<(), DeleteShippingAddressError> {
        self.repository
            .delete(user_id, address_id)
            .await
            .map_err(|e| match e {
                ShippingAddressRepositoryError::NotFound => DeleteShippingAddressError::NotFound,
                other => DeleteShippingAddressError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %user_id, address_id = %address_id, "Shipping address deleted");
        Ok(())
    }
}
