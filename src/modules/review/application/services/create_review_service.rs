use async_trait::async_trait;
use tracing::{info, warn};

use crate::auth::application::domain::entities::UserId;
use crate::modules::catalog::application::ports::outgoing::ProductQuery;
use crate::modules::review::application::domain::entities::Review;
use crate::modules::review::application::ports::{
    incoming::use_cases::{CreateReviewCommand, CreateReviewError, CreateReviewUseCase},
    outgoing::{NewReview, ReviewQuery, ReviewRepository, ReviewRepositoryError},
};

#[derive(Debug, Clone)]
pub struct CreateReviewService<P, Q, R>
where
    P: ProductQuery + Send + Sync,
    Q: ReviewQuery + Send + Sync,
    R: ReviewRepository + Send + Sync,
{
    products: P,
    reviews: Q,
    repository: R,
}

impl<P, Q, R> CreateReviewService<P, Q, R>
where
    P: ProductQuery + Send + Sync,
    Q: ReviewQuery + Send + Sync,
    R: ReviewRepository + Send + Sync,
{
    pub fn new(products: P, reviews: Q, repository: R) -> Self {
        Self {
            products,
            reviews,
            repository,
        }
    }
}

#[async_trait]
impl<P, Q, R> CreateReviewUseCase for CreateReviewService<P, Q, R>
where
    P: ProductQuery + Send + Sync,
    Q: ReviewQuery + Send + Sync,
    R: ReviewRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        product_slug: &str,
        command: CreateReviewCommand,
    ) -> Result<Review, CreateReviewError> {
        let product = self
            .products
            .find_by_slug(product_slug)
            .await
            .map_err(|e| CreateReviewError::RepositoryError(e.to_string()))?
            .ok_or(CreateReviewError::ProductNotFound)?;

        let already = self
            .reviews
            .exists_for(user_id, product.id)
            .await
            .map_err(|e| CreateReviewError::RepositoryError(e.to_string()))?;
        if already {
            return Err(CreateReviewError::AlreadyReviewed);
        }

        // The partial unique index catches a concurrent duplicate the check above missed.
        let review = self
            .repository
            .create(NewReview {
                user_id,
                product_id: product.id,
                rating: command.rating(),
                text: command.text().to_string(),
            })
            .await
            .map_err(|e| match e {
                ReviewRepositoryError::Duplicate => {
                    warn!(user_id = %user_id, slug = %product_slug, "Concurrent duplicate review");
                    CreateReviewError::AlreadyReviewed
                }
                other => CreateReviewError::RepositoryError(other.to_string()),
            })?;

        info!(review_id = %review.id, slug = %product_slug, "Review created");

        Ok(review)
    }
}
