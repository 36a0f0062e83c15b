//! In-memory shipping ports shared by the service tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::shipping::application::domain::entities::{AddressFields, ShippingAddress};
use crate::modules::shipping::application::ports::outgoing::{
    ShippingAddressQuery, ShippingAddressQueryError, ShippingAddressRepository,
    ShippingAddressRepositoryError,
};

pub fn stored(user_id: UserId, id: Uuid, fields: AddressFields) -> ShippingAddress {
    ShippingAddress {
        id,
        user_id,
        full_name: fields.full_name,
        email: fields.email,
        phone: fields.phone,
        address: fields.address,
        city: fields.city,
        country: fields.country,
        zipcode: fields.zipcode,
    }
}

/// Shared address book backing both the query and the repository fakes.
#[derive(Clone, Default)]
pub struct FakeAddressBook {
    pub addresses: Arc<Mutex<Vec<ShippingAddress>>>,
}

impl FakeAddressBook {
    pub fn with(addresses: Vec<ShippingAddress>) -> Self {
        Self {
            addresses: Arc::new(Mutex::new(addresses)),
        }
    }

    pub fn len(&self) -> usize {
        self.addresses.lock().unwrap().len()
    }
}

#[async_trait]
impl ShippingAddressQuery for FakeAddressBook {
    async fn list_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<ShippingAddress>, ShippingAddressQueryError> {
        Ok(self
            .addresses
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.belongs_to(user_id))
            .cloned()
            .collect())
    }

    async fn find_for_user(
        &self,
        user_id: UserId,
        address_id: Uuid,
    ) -> Result<Option<ShippingAddress>, ShippingAddressQueryError> {
        Ok(self
            .addresses
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == address_id && a.belongs_to(user_id))
            .cloned())
    }

    async fn find_identical(
        &self,
        user_id: UserId,
        fields: &AddressFields,
    ) -> Result<Option<ShippingAddress>, ShippingAddressQueryError> {
        Ok(self
            .addresses
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.belongs_to(user_id) && a.fields() == *fields)
            .cloned())
    }
}

#[async_trait]
impl ShippingAddressRepository for FakeAddressBook {
    async fn create(
        &self,
        user_id: UserId,
        fields: AddressFields,
    ) -> Result<ShippingAddress, ShippingAddressRepositoryError> {
        let address = stored(user_id, Uuid::new_v4(), fields);
        self.addresses.lock().unwrap().push(address.clone());
        Ok(address)
    }

    async fn update(
        &self,
        user_id: UserId,
        address_id: Uuid,
        fields: AddressFields,
    ) -> Result<ShippingAddress, ShippingAddressRepositoryError> {
        let mut addresses = self.addresses.lock().unwrap();
        let slot = addresses
            .iter_mut()
            .find(|a| a.id == address_id && a.belongs_to(user_id))
            .ok_or(ShippingAddressRepositoryError::NotFound)?;
        *slot = stored(user_id, address_id, fields);
        Ok(slot.clone())
    }

    async fn delete(
        &self,
        user_id: UserId,
        address_id: Uuid,
    ) -> Result<(), ShippingAddressRepositoryError> {
        let mut addresses = self.addresses.lock().unwrap();
        let before = addresses.len();
        addresses.retain(|a| !(a.id == address_id && a.belongs_to(user_id)));
        if addresses.len() == before {
            return Err(ShippingAddressRepositoryError::NotFound);
        }
        Ok(())
    }
}
