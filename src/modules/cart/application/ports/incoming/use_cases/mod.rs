mod list_cart_use_case;
mod toggle_cart_item_use_case;

pub use list_cart_use_case::{ListCartError, ListCartUseCase};
pub use toggle_cart_item_use_case::{
    ToggleCartItemCommand, ToggleCartItemCommandError, ToggleCartItemError,
    ToggleCartItemUseCase,
};
