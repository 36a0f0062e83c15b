use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::review::application::domain::entities::{Rating, Review};
use crate::shared::soft_delete::DeletionStatus;

#[derive(Debug, Clone)]
pub struct NewReview {
    pub user_id: UserId,
    pub product_id: Uuid,
    pub rating: Rating,
    pub text: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReviewRepositoryError {
    /// An active review by the same user for the same product already exists.
    #[error("Review already exists")]
    Duplicate,

    #[error("Review not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn create(&self, review: NewReview) -> Result<Review, ReviewRepositoryError>;

    async fn soft_delete(
        &self,
        review_id: Uuid,
        deletion: DeletionStatus,
    ) -> Result<(), ReviewRepositoryError>;
}
