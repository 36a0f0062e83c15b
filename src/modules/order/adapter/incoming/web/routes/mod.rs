mod checkout;
mod orders;
mod seller_orders;

pub use checkout::{checkout_handler, CheckoutRequestDto, CheckoutResponseDto};
pub use orders::{get_order_handler, list_orders_handler};
pub use seller_orders::{seller_order_items_handler, seller_orders_handler};
pub use checkout::__path_checkout_handler;
pub use orders::__path_get_order_handler;
pub use orders::__path_list_orders_handler;
pub use seller_orders::__path_seller_order_items_handler;
pub use seller_orders::__path_seller_orders_handler;
