use async_trait::async_trait;

use crate::modules::review::application::domain::entities::Review;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListReviewsError {
    #[error("Product does not exist!")]
    ProductNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

/// Active reviews of a product, newest first.
#[async_trait]
pub trait ListReviewsUseCase: Send + Sync {
    async fn execute(&self, product_slug: &str) -> Result<Vec<Review>, ListReviewsError>;
}
