use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::seller::application::{
    domain::entities::Seller,
    ports::{
        incoming::use_cases::{ApproveSellerError, ApproveSellerUseCase},
        outgoing::{SellerRepository, SellerRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct ApproveSellerService<R>
where
    R: SellerRepository + Send + Sync,
{
    repository: R,
}

impl<R> ApproveSellerService<R>
where
    R: SellerRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ApproveSellerUseCase for ApproveSellerService<R>
where
    R: SellerRepository + Send + Sync,
{
    async fn execute(&self, seller_id: Uuid, approved: bool) -> Result<Seller, ApproveSellerError> {
        let seller = self
            .repository
            .set_approval(seller_id, approved)
            .await
            .map_err(|e| match e {
                SellerRepositoryError::SellerNotFound => ApproveSellerError::SellerNotFound,
                other => ApproveSellerError::RepositoryError(other.to_string()),
            })?;

        info!(seller_id = %seller_id, approved, "Seller approval changed");

        Ok(seller)
    }
}
