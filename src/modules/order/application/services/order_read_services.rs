use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::order::application::domain::entities::{OrderDetail, OrderLine, OrderView};
use crate::modules::order::application::ports::{
    incoming::use_cases::{
        GetOrderError, GetOrderUseCase, ListOrdersError, ListOrdersUseCase, SellerOrderItemsError,
        SellerOrderItemsUseCase, SellerOrdersError, SellerOrdersUseCase,
    },
    outgoing::OrderQuery,
};
use crate::modules::seller::application::domain::entities::Seller;

#[derive(Debug, Clone)]
pub struct ListOrdersService<Q>
where
    Q: OrderQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListOrdersService<Q>
where
    Q: OrderQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListOrdersUseCase for ListOrdersService<Q>
where
    Q: OrderQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<Vec<OrderDetail>, ListOrdersError> {
        self.query
            .list_for_user(user_id)
            .await
            .map_err(|e| ListOrdersError::QueryError(e.to_string()))
    }
}

#[derive(Debug, Clone)]
pub struct GetOrderService<Q>
where
    Q: OrderQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetOrderService<Q>
where
    Q: OrderQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetOrderUseCase for GetOrderService<Q>
where
    Q: OrderQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId, tx_ref: &str) -> Result<OrderDetail, GetOrderError> {
        self.query
            .find_for_user(user_id, tx_ref.trim())
            .await
            .map_err(|e| GetOrderError::QueryError(e.to_string()))?
            .ok_or(GetOrderError::NotFound)
    }
}

#[derive(Debug, Clone)]
pub struct SellerOrdersService<Q>
where
    Q: OrderQuery + Send + Sync,
{
    query: Q,
}

impl<Q> SellerOrdersService<Q>
where
    Q: OrderQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> SellerOrdersUseCase for SellerOrdersService<Q>
where
    Q: OrderQuery + Send + Sync,
{
    async fn execute(&self, seller: &Seller) -> Result<Vec<OrderView>, SellerOrdersError> {
        self.query
            .list_for_seller(seller.id)
            .await
            .map_err(|e| SellerOrdersError::QueryError(e.to_string()))
    }
}

#[derive(Debug, Clone)]
pub struct SellerOrderItemsService<Q>
where
    Q: OrderQuery + Send + Sync,
{
    query: Q,
}

impl<Q> SellerOrderItemsService<Q>
where
    Q: OrderQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> SellerOrderItemsUseCase for SellerOrderItemsService<Q>
where
    Q: OrderQuery + Send + Sync,
{
    async fn execute(
        &self,
        seller: &Seller,
        tx_ref: &str,
    ) -> Result<Vec<OrderLine>, SellerOrderItemsError> {
        self.query
            .seller_items(seller.id, tx_ref.trim())
            .await
            .map_err(|e| SellerOrderItemsError::QueryError(e.to_string()))?
            .ok_or(SellerOrderItemsError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use uuid::Uuid;

    use crate::modules::order::application::domain::entities::fixtures::{detail, order_line};
    use crate::modules::order::application::services::test_doubles::FakeOrderQuery;
    use crate::modules::seller::application::domain::entities::fixtures::seller;

    #[tokio::test]
    async fn buyer_cannot_read_foreign_order() {
        let owner = UserId::from(Uuid::new_v4());
        let query = FakeOrderQuery::with(vec![(owner, detail("AAAABBBBCCCC", vec![]))]);
        let service = GetOrderService::new(query);

        assert!(service.execute(owner, "AAAABBBBCCCC").await.is_ok());
        assert!(matches!(
            service
                .execute(UserId::from(Uuid::new_v4()), "AAAABBBBCCCC")
                .await,
            Err(GetOrderError::NotFound)
        ));
    }

    #[tokio::test]
    async fn seller_sees_only_orders_with_their_products() {
        // Arrange
        let me = seller(UserId::from(Uuid::new_v4()), true);
        let buyer = UserId::from(Uuid::new_v4());
        let mut query = FakeOrderQuery::with(vec![
            (buyer, detail("MINE00000001", vec![])),
            (buyer, detail("THEIRS000001", vec![])),
        ]);
        query.seller_lines.insert(
            me.id,
            HashMap::from([(
                "MINE00000001".to_string(),
                vec![order_line("desk-lamp", dec!(19.99), 2)],
            )]),
        );

        // Act
        let orders = SellerOrdersService::new(query.clone()).execute(&me).await.unwrap();
        let items = SellerOrderItemsService::new(query.clone())
            .execute(&me, "MINE00000001")
            .await
            .unwrap();
        let foreign = SellerOrderItemsService::new(query)
            .execute(&me, "THEIRS000001")
            .await;

        // Assert
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].tx_ref, "MINE00000001");
        assert_eq!(items[0].total, dec!(39.98));
        assert!(matches!(foreign, Err(SellerOrderItemsError::NotFound)));
    }
}
