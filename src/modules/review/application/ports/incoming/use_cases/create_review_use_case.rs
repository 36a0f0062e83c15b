use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::review::application::domain::entities::{Rating, RatingOutOfRange, Review};

//
// ──────────────────────────────────────────────────────────
// Create Review Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateReviewCommand {
    rating: Rating,
    text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateReviewCommandError {
    #[error(transparent)]
    Rating(#[from] RatingOutOfRange),

    #[error("Review text cannot be empty")]
    EmptyText,
}

impl CreateReviewCommand {
    pub fn new(rating: i32, text: String) -> Result<Self, CreateReviewCommandError> {
        let rating = Rating::new(rating)?;
        let text = text.trim().to_string();
        if text.is_empty() {
            return Err(CreateReviewCommandError::EmptyText);
        }

        Ok(Self { rating, text })
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateReviewError {
    #[error("Product does not exist!")]
    ProductNotFound,

    #[error("You have already reviewed this product")]
    AlreadyReviewed,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// One active review per (user, product); a soft-deleted review no longer counts.
#[async_trait]
pub trait CreateReviewUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        product_slug: &str,
        command: CreateReviewCommand,
    ) -> Result<Review, CreateReviewError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_outside_range_is_rejected() {
        assert_eq!(
            CreateReviewCommand::new(6, "great".to_string()),
            Err(CreateReviewCommandError::Rating(RatingOutOfRange))
        );
    }

    #[test]
    fn text_is_trimmed_and_required() {
        let command = CreateReviewCommand::new(5, "  great lamp ".to_string()).unwrap();
        assert_eq!(command.text(), "great lamp");
        assert_eq!(command.rating().value(), 5);

        assert_eq!(
            CreateReviewCommand::new(3, "   ".to_string()),
            Err(CreateReviewCommandError::EmptyText)
        );
    }
}
