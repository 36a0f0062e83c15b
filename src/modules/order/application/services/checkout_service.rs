use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::auth::application::domain::entities::UserId;
use crate::modules::cart::application::ports::outgoing::CartQuery;
use crate::modules::order::application::domain::entities::{OrderDetail, ShippingSnapshot};
use crate::modules::order::application::ports::{
    incoming::use_cases::{CheckoutCommand, CheckoutError, CheckoutUseCase},
    outgoing::{OrderQuery, OrderRepository, OrderRepositoryError, PlaceOrder},
};
use crate::modules::shipping::application::ports::outgoing::ShippingAddressQuery;

#[derive(Debug, Clone)]
pub struct CheckoutService<C, S, R, Q>
where
    C: CartQuery + Send + Sync,
    S: ShippingAddressQuery + Send + Sync,
    R: OrderRepository + Send + Sync,
    Q: OrderQuery + Send + Sync,
{
    cart: C,
    shipping: S,
    repository: R,
    orders: Q,
}

impl<C, S, R, Q> CheckoutService<C, S, R, Q>
where
    C: CartQuery + Send + Sync,
    S: ShippingAddressQuery + Send + Sync,
    R: OrderRepository + Send + Sync,
    Q: OrderQuery + Send + Sync,
{
    pub fn new(cart: C, shipping: S, repository: R, orders: Q) -> Self {
        Self {
            cart,
            shipping,
            repository,
            orders,
        }
    }
}

#[async_trait]
impl<C, S, R, Q> CheckoutUseCase for CheckoutService<C, S, R, Q>
where
    C: CartQuery + Send + Sync,
    S: ShippingAddressQuery + Send + Sync,
    R: OrderRepository + Send + Sync,
    Q: OrderQuery + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        command: CheckoutCommand,
    ) -> Result<OrderDetail, CheckoutError> {
        let lines = self
            .cart
            .list_lines(user_id)
            .await
            .map_err(|e| CheckoutError::RepositoryError(e.to_string()))?;

        if lines.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let address = self
            .shipping
            .find_for_user(user_id, command.shipping_id)
            .await
            .map_err(|e| CheckoutError::RepositoryError(e.to_string()))?
            .ok_or(CheckoutError::ShippingNotFound)?;

        let placed = self
            .repository
            .place_order(PlaceOrder {
                user_id,
                shipping: ShippingSnapshot::from(&address),
                line_ids: lines.iter().map(|l| l.id).collect(),
            })
            .await
            .map_err(|e| match e {
                OrderRepositoryError::CartChanged => {
                    warn!(user_id = %user_id, "Cart changed during checkout");
                    CheckoutError::CartChanged
                }
                OrderRepositoryError::ReferenceExhausted(msg) => {
                    error!(user_id = %user_id, error = %msg, "Could not generate a unique tx_ref");
                    CheckoutError::ReferenceExhausted(msg)
                }
                OrderRepositoryError::DatabaseError(msg) => CheckoutError::RepositoryError(msg),
            })?;

        info!(
            user_id = %user_id,
            tx_ref = %placed.tx_ref,
            items = lines.len(),
            "Order placed"
        );

        self.orders
            .find_for_user(user_id, &placed.tx_ref)
            .await
            .map_err(|e| CheckoutError::RepositoryError(e.to_string()))?
            .ok_or_else(|| CheckoutError::RepositoryError("placed order not found".into()))
    }
}
