use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteReviewError {
    #[error("Review does not exist!")]
    NotFound,

    #[error("Only the author can delete a review")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteReviewUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId, review_id: Uuid) -> Result<(), DeleteReviewError>;
}
