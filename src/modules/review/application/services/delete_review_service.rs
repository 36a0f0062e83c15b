use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::review::application::ports::{
    incoming::use_cases::{DeleteReviewError, DeleteReviewUseCase},
    outgoing::{ReviewQuery, ReviewRepository, ReviewRepositoryError},
};
use crate::shared::soft_delete::Deletable;

#[derive(Debug, Clone)]
pub struct DeleteReviewService<Q, R>
where
    Q: ReviewQuery + Send + Sync,
    R: ReviewRepository + Send + Sync,
{
    reviews: Q,
    repository: R,
}

impl<Q, R> DeleteReviewService<Q, R>
where
    Q: ReviewQuery + Send + Sync,
    R: ReviewRepository + Send + Sync,
{
    pub fn new(reviews: Q, repository: R) -> Self {
        Self {
            reviews,
            repository,
        }
    }
}

#[async_trait]
impl<Q, R> DeleteReviewUseCase for DeleteReviewService<Q, R>
where
    Q: ReviewQuery + Send + Sync,
    R: ReviewRepository + Send + Sync,
{
    async fn execute(&self, user_id: UserId, review_id: Uuid) -> Result<(), DeleteReviewError> {
        let mut review = self
            .reviews
            .find_by_id(review_id)
            .await
            .map_err(|e| DeleteReviewError::RepositoryError(e.to_string()))?
            .ok_or(DeleteReviewError::NotFound)?;

        if !review.written_by(user_id) {
            warn!(user_id = %user_id, review_id = %review_id, "Review delete by non-author");
            return Err(DeleteReviewError::Forbidden);
        }

        review.mark_deleted(Utc::now());

        self.repository
            .soft_delete(review.id, review.deletion_status())
            .await
            .map_err(|e| match e {
                ReviewRepositoryError::NotFound => DeleteReviewError::NotFound,
                other => DeleteReviewError::RepositoryError(other.to_string()),
            })?;

        info!(review_id = %review_id, "Review soft-deleted");

        Ok(())
    }
}
