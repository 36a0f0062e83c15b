use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{AccountType, UserId};
use crate::modules::seller::application::domain::entities::{Seller, SellerProfile};

/// Everything persisted by one seller application: the seller row upsert
/// and the applicant's new account type, written together.
#[derive(Debug, Clone)]
pub struct SellerApplication {
    pub user_id: UserId,
    pub account_type: AccountType,
    pub slug: String,
    pub profile: SellerProfile,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SellerRepositoryError {
    #[error("User not found")]
    UserNotFound,

    #[error("Seller not found")]
    SellerNotFound,

    #[error("Seller slug already exists")]
    SlugAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SellerRepository: Send + Sync {
    /// Inserts the seller record for `user_id` or overwrites its profile.
    /// The approval flag of an existing record is left untouched.
    async fn save_application(
        &self,
        application: SellerApplication,
    ) -> Result<Seller, SellerRepositoryError>;

    async fn set_approval(
        &self,
        seller_id: Uuid,
        approved: bool,
    ) -> Result<Seller, SellerRepositoryError>;
}
