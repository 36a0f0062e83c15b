mod list_cart;
mod toggle_cart_item;

pub use list_cart::list_cart_handler;
pub use toggle_cart_item::{toggle_cart_item_handler, CartItemResponseDto, ToggleCartItemRequestDto};
pub use list_cart::__path_list_cart_handler;
pub use toggle_cart_item::__path_toggle_cart_item_handler;
