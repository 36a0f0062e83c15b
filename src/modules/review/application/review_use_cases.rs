use std::sync::Arc;

use crate::modules::review::application::ports::incoming::use_cases::{
    CreateReviewUseCase, DeleteReviewUseCase, ListReviewsUseCase,
};

#[derive(Clone)]
pub struct ReviewUseCases {
    pub list: Arc<dyn ListReviewsUseCase + Send + Sync>,
    pub create: Arc<dyn CreateReviewUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteReviewUseCase + Send + Sync>,
}
