pub mod list_cart_service;
pub mod toggle_cart_item_service;

pub use list_cart_service::ListCartService;
pub use toggle_cart_item_service::ToggleCartItemService;
