use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::seller::application::domain::entities::{Seller, SellerProfile};

//
// ──────────────────────────────────────────────────────────
// Apply Seller Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct ApplySellerCommand {
    user_id: UserId,
    profile: SellerProfile,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApplySellerCommandError {
    #[error("{0} cannot be empty")]
    MissingField(&'static str),

    #[error("Business name too long")]
    BusinessNameTooLong,
}

impl ApplySellerCommand {
    pub fn new(user_id: UserId, profile: SellerProfile) -> Result<Self, ApplySellerCommandError> {
        let profile = SellerProfile {
            business_name: required("business_name", profile.business_name)?,
            inn_identification_number: required(
                "inn_identification_number",
                profile.inn_identification_number,
            )?,
            website_url: profile
                .website_url
                .map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty()),
            phone_number: required("phone_number", profile.phone_number)?,
            business_description: profile.business_description.trim().to_string(),
            business_address: required("business_address", profile.business_address)?,
            city: required("city", profile.city)?,
            postal_code: required("postal_code", profile.postal_code)?,
            bank_name: required("bank_name", profile.bank_name)?,
            bank_bic_number: required("bank_bic_number", profile.bank_bic_number)?,
            bank_account_number: required("bank_account_number", profile.bank_account_number)?,
            bank_routing_number: required("bank_routing_number", profile.bank_routing_number)?,
        };

        if profile.business_name.chars().count() > 255 {
            return Err(ApplySellerCommandError::BusinessNameTooLong);
        }

        Ok(Self { user_id, profile })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn profile(&self) -> &SellerProfile {
        &self.profile
    }

    pub fn into_profile(self) -> SellerProfile {
        self.profile
    }
}

fn required(field: &'static str, value: String) -> Result<String, ApplySellerCommandError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApplySellerCommandError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ApplySellerError {
    #[error("User not found")]
    UserNotFound,

    #[error("Could not derive a free slug: {0}")]
    SlugUnavailable(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ApplySellerUseCase: Send + Sync {
    async fn execute(&self, command: ApplySellerCommand) -> Result<Seller, ApplySellerError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::seller::application::domain::entities::fixtures::profile;
    use uuid::Uuid;

    #[test]
    fn trims_fields_and_drops_blank_website() {
        let mut input = profile("  Acme Goods  ");
        input.website_url = Some("   ".to_string());

        let command = ApplySellerCommand::new(UserId::from(Uuid::new_v4()), input).unwrap();

        assert_eq!(command.profile().business_name, "Acme Goods");
        assert!(command.profile().website_url.is_none());
    }

    #[test]
    fn rejects_missing_bank_details() {
        let mut input = profile("Acme");
        input.bank_account_number = " ".to_string();

        let err = ApplySellerCommand::new(UserId::from(Uuid::new_v4()), input).unwrap_err();

        assert_eq!(
            err,
            ApplySellerCommandError::MissingField("bank_account_number")
        );
    }
}
