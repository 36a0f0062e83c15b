use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::seller::application::domain::entities::Seller;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SellerQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SellerQuery: Send + Sync {
    async fn find_by_user(&self, user_id: UserId) -> Result<Option<Seller>, SellerQueryError>;

    async fn find_by_id(&self, seller_id: Uuid) -> Result<Option<Seller>, SellerQueryError>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Seller>, SellerQueryError>;

    /// True when another user's seller record already uses `slug`.
    async fn slug_taken(&self, slug: &str, except_user: UserId) -> Result<bool, SellerQueryError>;
}
