use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::shared::patch::PatchField;

/// Recipient and address content of a shipping record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressFields {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub zipcode: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ShippingAddress {
    pub id: Uuid,
    #[serde(skip)]
    pub user_id: UserId,
    #[schema(example = "Ada Lovelace")]
    pub full_name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub zipcode: Option<i32>,
}

impl ShippingAddress {
    pub fn fields(&self) -> AddressFields {
        AddressFields {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            country: self.country.clone(),
            zipcode: self.zipcode,
        }
    }

    pub fn belongs_to(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }
}

/// Editable fields. Recipient name and email can be replaced but never cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressPatch {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: PatchField<String>,
    pub address: PatchField<String>,
    pub city: PatchField<String>,
    pub country: PatchField<String>,
    pub zipcode: PatchField<i32>,
}

impl AddressPatch {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.email.is_none()
            && self.phone.is_unset()
            && self.address.is_unset()
            && self.city.is_unset()
            && self.country.is_unset()
            && self.zipcode.is_unset()
    }
}

impl AddressFields {
    pub fn patched(self, patch: AddressPatch) -> AddressFields {
        AddressFields {
            full_name: patch.full_name.unwrap_or(self.full_name),
            email: patch.email.unwrap_or(self.email),
            phone: patch.phone.apply_to_option(self.phone),
            address: patch.address.apply_to_option(self.address),
            city: patch.city.apply_to_option(self.city),
            country: patch.country.apply_to_option(self.country),
            zipcode: patch.zipcode.apply_to_option(self.zipcode),
        }
    }
}
