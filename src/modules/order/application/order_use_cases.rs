use std::sync::Arc;

use crate::modules::order::application::ports::incoming::use_cases::{
    CheckoutUseCase, GetOrderUseCase, ListOrdersUseCase, SellerOrderItemsUseCase,
    SellerOrdersUseCase,
};

#[derive(Clone)]
pub struct OrderUseCases {
    pub checkout: Arc<dyn CheckoutUseCase + Send + Sync>,
    pub list: Arc<dyn ListOrdersUseCase + Send + Sync>,
    pub get: Arc<dyn GetOrderUseCase + Send + Sync>,
    pub seller_orders: Arc<dyn SellerOrdersUseCase + Send + Sync>,
    pub seller_items: Arc<dyn SellerOrderItemsUseCase + Send + Sync>,
}
