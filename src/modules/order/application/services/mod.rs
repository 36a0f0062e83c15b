pub mod checkout_service;
pub mod order_read_services;

#[cfg(test)]
pub(crate) mod test_doubles;

pub use checkout_service::CheckoutService;
pub use order_read_services::{
    GetOrderService, ListOrdersService, SellerOrderItemsService, SellerOrdersService,
};
