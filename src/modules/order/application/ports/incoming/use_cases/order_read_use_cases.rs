use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::order::application::domain::entities::{OrderDetail, OrderLine, OrderView};
use crate::modules::seller::application::domain::entities::Seller;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListOrdersError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListOrdersUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<Vec<OrderDetail>, ListOrdersError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetOrderError {
    #[error("Order does not exist!")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetOrderUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId, tx_ref: &str) -> Result<OrderDetail, GetOrderError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SellerOrdersError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait SellerOrdersUseCase: Send + Sync {
    async fn execute(&self, seller: &Seller) -> Result<Vec<OrderView>, SellerOrdersError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SellerOrderItemsError {
    #[error("Order does not exist!")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait SellerOrderItemsUseCase: Send + Sync {
    async fn execute(
        &self,
        seller: &Seller,
        tx_ref: &str,
    ) -> Result<Vec<OrderLine>, SellerOrderItemsError>;
}
