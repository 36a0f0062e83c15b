mod delete_review;
mod product_reviews;

pub use delete_review::delete_review_handler;
pub use product_reviews::{create_review_handler, list_reviews_handler, CreateReviewRequestDto};
pub use delete_review::__path_delete_review_handler;
pub use product_reviews::__path_create_review_handler;
pub use product_reviews::__path_list_reviews_handler;
