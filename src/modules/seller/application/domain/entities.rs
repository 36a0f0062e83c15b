use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

/// Business profile submitted with a seller application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SellerProfile {
    pub business_name: String,
    pub inn_identification_number: String,
    pub website_url: Option<String>,
    pub phone_number: String,
    pub business_description: String,
    pub business_address: String,
    pub city: String,
    pub postal_code: String,
    pub bank_name: String,
    pub bank_bic_number: String,
    pub bank_account_number: String,
    pub bank_routing_number: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Seller {
    pub id: Uuid,
    #[schema(value_type = uuid::Uuid)]
    pub user_id: UserId,
    pub business_name: String,
    pub slug: String,
    pub inn_identification_number: String,
    pub website_url: Option<String>,
    pub phone_number: String,
    pub business_description: String,
    pub business_address: String,
    pub city: String,
    pub postal_code: String,
    pub bank_name: String,
    pub bank_bic_number: String,
    pub bank_account_number: String,
    pub bank_routing_number: String,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Seller {
    /// Only approved sellers may publish or change products.
    pub fn can_sell(&self) -> bool {
        self.is_approved
    }

    pub fn owns(&self, seller_id: Option<Uuid>) -> bool {
        seller_id == Some(self.id)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn profile(business_name: &str) -> SellerProfile {
        SellerProfile {
            business_name: business_name.to_string(),
            inn_identification_number: "7707083893".to_string(),
            website_url: None,
            phone_number: "+15550100".to_string(),
            business_description: "Handmade goods".to_string(),
            business_address: "1 Market St".to_string(),
            city: "Springfield".to_string(),
            postal_code: "12345".to_string(),
            bank_name: "First Bank".to_string(),
            bank_bic_number: "044525225".to_string(),
            bank_account_number: "40702810900000000001".to_string(),
            bank_routing_number: "021000021".to_string(),
        }
    }

    pub fn seller(user_id: UserId, approved: bool) -> Seller {
        let p = profile("Acme Goods");
        Seller {
            id: Uuid::new_v4(),
            user_id,
            business_name: p.business_name,
            slug: "acme-goods".to_string(),
            inn_identification_number: p.inn_identification_number,
            website_url: p.website_url,
            phone_number: p.phone_number,
            business_description: p.business_description,
            business_address: p.business_address,
            city: p.city,
            postal_code: p.postal_code,
            bank_name: p.bank_name,
            bank_bic_number: p.bank_bic_number,
            bank_account_number: p.bank_account_number,
            bank_routing_number: p.bank_routing_number,
            is_approved: approved,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}
