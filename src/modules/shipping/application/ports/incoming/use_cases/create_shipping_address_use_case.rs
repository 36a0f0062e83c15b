use async_trait::async_trait;
use email_address::EmailAddress;
use std::str::FromStr;

use crate::auth::application::domain::entities::UserId;
use crate::modules::shipping::application::domain::entities::{AddressFields, ShippingAddress};

//
// ──────────────────────────────────────────────────────────
// Validated address input
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShippingAddressCommandError {
    #[error("Full name cannot be empty")]
    EmptyFullName,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Zipcode cannot be negative")]
    NegativeZipcode,
}

/// Address fields after trimming; blank optional fields become absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingAddressInput {
    fields: AddressFields,
}

pub(super) fn clean_full_name(raw: String) -> Result<String, ShippingAddressCommandError> {
    let name = raw.trim().to_string();
    if name.is_empty() {
        return Err(ShippingAddressCommandError::EmptyFullName);
    }
    Ok(name)
}

pub(super) fn clean_email(raw: String) -> Result<String, ShippingAddressCommandError> {
    let email = raw.trim().to_lowercase();
    EmailAddress::from_str(&email).map_err(|_| ShippingAddressCommandError::InvalidEmail)?;
    Ok(email)
}

pub(super) fn clean_optional(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

pub(super) fn check_zipcode(zipcode: Option<i32>) -> Result<(), ShippingAddressCommandError> {
    match zipcode {
        Some(z) if z < 0 => Err(ShippingAddressCommandError::NegativeZipcode),
        _ => Ok(()),
    }
}

impl ShippingAddressInput {
    pub fn new(
        full_name: String,
        email: String,
        phone: Option<String>,
        address: Option<String>,
        city: Option<String>,
        country: Option<String>,
        zipcode: Option<i32>,
    ) -> Result<Self, ShippingAddressCommandError> {
        check_zipcode(zipcode)?;

        Ok(Self {
            fields: AddressFields {
                full_name: clean_full_name(full_name)?,
                email: clean_email(email)?,
                phone: clean_optional(phone),
                address: clean_optional(address),
                city: clean_optional(city),
                country: clean_optional(country),
                zipcode,
            },
        })
    }

    pub fn fields(&self) -> &AddressFields {
        &self.fields
    }

    pub fn into_fields(self) -> AddressFields {
        self.fields
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case
// ──────────────────────────────────────────────────────────
//

/// The stored record and whether this call created it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingAddressCreation {
    pub address: ShippingAddress,
    pub created: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateShippingAddressError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Idempotent by content: an identical record of the same user is returned
/// instead of a duplicate.
#[async_trait]
pub trait CreateShippingAddressUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        input: ShippingAddressInput,
    ) -> Result<ShippingAddressCreation, CreateShippingAddressError>;
}
