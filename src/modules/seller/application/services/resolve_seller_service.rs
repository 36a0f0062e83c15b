use async_trait::async_trait;
use tracing::debug;

use crate::auth::application::domain::entities::UserId;
use crate::modules::seller::application::{
    domain::entities::Seller,
    ports::{
        incoming::use_cases::{ResolveSellerError, ResolveSellerUseCase},
        outgoing::SellerQuery,
    },
};

#[derive(Debug, Clone)]
pub struct ResolveSellerService<Q>
where
    Q: SellerQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ResolveSellerService<Q>
where
    Q: SellerQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ResolveSellerUseCase for ResolveSellerService<Q>
where
    Q: SellerQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<Seller, ResolveSellerError> {
        let seller = self
            .query
            .find_by_user(user_id)
            .await
            .map_err(|e| ResolveSellerError::QueryError(e.to_string()))?
            .ok_or(ResolveSellerError::NotASeller)?;

        if !seller.can_sell() {
            debug!(user_id = %user_id, "Seller area refused: not approved");
            return Err(ResolveSellerError::NotApproved);
        }

        Ok(seller)
    }
}
