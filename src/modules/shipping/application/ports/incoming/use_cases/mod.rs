mod create_shipping_address_use_case;
mod delete_shipping_address_use_case;
mod get_shipping_address_use_case;
mod list_shipping_addresses_use_case;
mod update_shipping_address_use_case;

pub use create_shipping_address_use_case::{
    CreateShippingAddressError, CreateShippingAddressUseCase, ShippingAddressCommandError,
    ShippingAddressCreation, ShippingAddressInput,
};
pub use delete_shipping_address_use_case::{
    DeleteShippingAddressError, DeleteShippingAddressUseCase,
};
pub use get_shipping_address_use_case::{GetShippingAddressError, GetShippingAddressUseCase};
pub use list_shipping_addresses_use_case::{
    ListShippingAddressesError, ListShippingAddressesUseCase,
};
pub use update_shipping_address_use_case::{
    UpdateShippingAddressCommand, UpdateShippingAddressError, UpdateShippingAddressUseCase,
};
