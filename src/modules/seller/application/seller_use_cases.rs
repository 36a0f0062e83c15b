use std::sync::Arc;

use crate::modules::seller::application::ports::incoming::use_cases::{
    ApplySellerUseCase, ApproveSellerUseCase, ResolveSellerUseCase,
};

#[derive(Clone)]
pub struct SellerUseCases {
    pub apply: Arc<dyn ApplySellerUseCase + Send + Sync>,
    pub approve: Arc<dyn ApproveSellerUseCase + Send + Sync>,
    pub resolve: Arc<dyn ResolveSellerUseCase + Send + Sync>,
}
