pub mod create_review_service;
pub mod delete_review_service;
pub mod list_reviews_service;

#[cfg(test)]
pub(crate) mod test_doubles;

pub use create_review_service::CreateReviewService;
pub use delete_review_service::DeleteReviewService;
pub use list_reviews_service::ListReviewsService;
