mod checkout_use_case;
mod order_read_use_cases;

pub use checkout_use_case::{CheckoutCommand, CheckoutError, CheckoutUseCase};
pub use order_read_use_cases::{
    GetOrderError, GetOrderUseCase, ListOrdersError, ListOrdersUseCase, SellerOrderItemsError,
    SellerOrderItemsUseCase, SellerOrdersError, SellerOrdersUseCase,
};
