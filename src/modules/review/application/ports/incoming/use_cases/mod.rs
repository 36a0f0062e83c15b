mod create_review_use_case;
mod delete_review_use_case;
mod list_reviews_use_case;

pub use create_review_use_case::{
    CreateReviewCommand, CreateReviewCommandError, CreateReviewError, CreateReviewUseCase,
};
pub use delete_review_use_case::{DeleteReviewError, DeleteReviewUseCase};
pub use list_reviews_use_case::{ListReviewsError, ListReviewsUseCase};
