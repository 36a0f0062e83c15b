mod shipping_address;
mod shipping_addresses;

pub use shipping_address::{
    delete_shipping_address_handler, get_shipping_address_handler,
    update_shipping_address_handler, UpdateShippingAddressRequestDto,
};
pub use shipping_addresses::{
    create_shipping_address_handler, list_shipping_addresses_handler,
    CreateShippingAddressRequestDto,
};
pub use shipping_address::__path_delete_shipping_address_handler;
pub use shipping_address::__path_get_shipping_address_handler;
pub use shipping_address::__path_update_shipping_address_handler;
pub use shipping_addresses::__path_create_shipping_address_handler;
pub use shipping_addresses::__path_list_shipping_addresses_handler;
