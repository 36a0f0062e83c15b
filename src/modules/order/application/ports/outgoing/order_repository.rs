use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::order::application::domain::entities::ShippingSnapshot;

/// Everything needed to turn the listed cart lines into an order.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceOrder {
    pub user_id: UserId,
    pub shipping: ShippingSnapshot,
    pub line_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedOrder {
    pub id: Uuid,
    pub tx_ref: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum OrderRepositoryError {
    /// A listed line was removed or checked out by another request.
    #[error("Cart changed during checkout")]
    CartChanged,

    #[error("Transaction reference could not be generated: {0}")]
    ReferenceExhausted(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Creates the order and binds the lines to it in one transaction.
    async fn place_order(&self, order: PlaceOrder) -> Result<PlacedOrder, OrderRepositoryError>;
}
