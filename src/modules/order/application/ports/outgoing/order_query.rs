use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::order::application::domain::entities::{OrderDetail, OrderLine, OrderView};

#[derive(Debug, Clone, thiserror::Error)]
pub enum OrderQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait OrderQuery: Send + Sync {
    /// Newest first.
    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<OrderDetail>, OrderQueryError>;

    async fn find_for_user(
        &self,
        user_id: UserId,
        tx_ref: &str,
    ) -> Result<Option<OrderDetail>, OrderQueryError>;

    /// Orders holding at least one of the seller's products, newest first.
    async fn list_for_seller(&self, seller_id: Uuid) -> Result<Vec<OrderView>, OrderQueryError>;

    /// The seller's lines of one order; `None` when the order has none.
    async fn seller_items(
        &self,
        seller_id: Uuid,
        tx_ref: &str,
    ) -> Result<Option<Vec<OrderLine>>, OrderQueryError>;
}
