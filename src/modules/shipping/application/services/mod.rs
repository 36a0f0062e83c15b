pub mod address_read_services;
pub mod address_write_services;
pub mod create_shipping_address_service;

#[cfg(test)]
pub(crate) mod test_doubles;

pub use address_read_services::{GetShippingAddressService, ListShippingAddressesService};
pub use address_write_services::{DeleteShippingAddressService, UpdateShippingAddressService};
pub use create_shipping_address_service::CreateShippingAddressService;
