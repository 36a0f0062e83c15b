use async_trait::async_trait;
use uuid::Uuid;

use super::create_shipping_address_use_case::{
    check_zipcode, clean_email, clean_full_name, clean_optional, ShippingAddressCommandError,
};
use crate::auth::application::domain::entities::UserId;
use crate::modules::shipping::application::domain::entities::{AddressPatch, ShippingAddress};
use crate::shared::patch::PatchField;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateShippingAddressCommand {
    patch: AddressPatch,
}

fn clean_patch(field: PatchField<String>) -> PatchField<String> {
    match field {
        PatchField::Value(v) => match clean_optional(Some(v)) {
            Some(v) => PatchField::Value(v),
            None => PatchField::Null,
        },
        other => other,
    }
}

impl UpdateShippingAddressCommand {
    pub fn new(patch: AddressPatch) -> Result<Self, ShippingAddressCommandError> {
        check_zipcode(patch.zipcode.as_value().copied())?;

        Ok(Self {
            patch: AddressPatch {
                full_name: patch.full_name.map(clean_full_name).transpose()?,
                email: patch.email.map(clean_email).transpose()?,
                phone: clean_patch(patch.phone),
                address: clean_patch(patch.address),
                city: clean_patch(patch.city),
                country: clean_patch(patch.country),
                zipcode: patch.zipcode,
            },
        })
    }

    pub fn patch(&self) -> &AddressPatch {
        &self.patch
    }

    pub fn into_patch(self) -> AddressPatch {
        self.patch
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateShippingAddressError {
    #[error("Shipping address does not exist!")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateShippingAddressUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        address_id: Uuid,
        command: UpdateShippingAddressCommand,
    ) -> Result<ShippingAddress, UpdateShippingAddressError>;
}
