use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::order::application::domain::entities::OrderDetail;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutCommand {
    pub shipping_id: Uuid,
}

impl CheckoutCommand {
    pub fn new(shipping_id: Uuid) -> Self {
        Self { shipping_id }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CheckoutError {
    #[error("No Items in Cart")]
    EmptyCart,

    #[error("Shipping address does not exist!")]
    ShippingNotFound,

    #[error("Cart changed during checkout")]
    CartChanged,

    #[error("Transaction reference exhausted: {0}")]
    ReferenceExhausted(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Turns the caller's whole cart into one order.
///
/// The cart is checked before the shipping address, so an empty cart wins
/// over an unknown address. Not idempotent: every call consumes whatever is
/// in the cart at that moment.
#[async_trait]
pub trait CheckoutUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        command: CheckoutCommand,
    ) -> Result<OrderDetail, CheckoutError>;
}
