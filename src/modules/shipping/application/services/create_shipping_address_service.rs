use async_trait::async_trait;
use tracing::debug;

use crate::auth::application::domain::entities::UserId;
use crate::modules::shipping::application::ports::{
    incoming::use_cases::{
        CreateShippingAddressError, CreateShippingAddressUseCase, ShippingAddressCreation,
        ShippingAddressInput,
    },
    outgoing::{ShippingAddressQuery, ShippingAddressRepository},
};

#[derive(Debug, Clone)]
pub struct CreateShippingAddressService<Q, R>
where
    Q: ShippingAddressQuery + Send + Sync,
    R: ShippingAddressRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> CreateShippingAddressService<Q, R>
where
    Q: ShippingAddressQuery + Send + Sync,
    R: ShippingAddressRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> CreateShippingAddressUseCase for CreateShippingAddressService<Q, R>
where
    Q: ShippingAddressQuery + Send + Sync,
    R: ShippingAddressRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        input: ShippingAddressInput,
    ) -> Result<ShippingAddressCreation, CreateShippingAddressError> {
        let existing = self
            .query
            .find_identical(user_id, input.fields())
            .await
            .map_err(|e| CreateShippingAddressError::RepositoryError(e.to_string()))?;

        if let Some(address) = existing {
            debug!(user_id = %user_id, address_id = %address.id, "Identical shipping address reused");
            return Ok(ShippingAddressCreation {
                address,
                created: false,
            });
        }

        let address = self
            .repository
            .create(user_id, input.into_fields())
            .await
            .map_err(|e| CreateShippingAddressError::RepositoryError(e.to_string()))?;

        Ok(ShippingAddressCreation {
            address,
            created: true,
        })
    }
}
