use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

/// Write performed on the (user, product) in-cart line. Carries the line id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartMutation {
    Created(Uuid),
    Updated(Uuid),
    Removed,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CartRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Sets the quantity of the user's in-cart line for `product_id`,
    /// creating it when missing and deleting it when `quantity` is zero.
    async fn upsert_or_remove(
        &self,
        user_id: UserId,
        product_id: Uuid,
        quantity: i32,
    ) -> Result<CartMutation, CartRepositoryError>;
}
