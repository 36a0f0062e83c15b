use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::review::application::domain::entities::Review;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReviewQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side. Soft-deleted reviews are invisible to every method.
#[async_trait]
pub trait ReviewQuery: Send + Sync {
    /// Newest first.
    async fn list_for_product(&self, product_id: Uuid) -> Result<Vec<Review>, ReviewQueryError>;

    async fn find_by_id(&self, review_id: Uuid) -> Result<Option<Review>, ReviewQueryError>;

    async fn exists_for(
        &self,
        user_id: UserId,
        product_id: Uuid,
    ) -> Result<bool, ReviewQueryError>;
}
