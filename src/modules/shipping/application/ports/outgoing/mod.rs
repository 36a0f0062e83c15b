pub mod shipping_address_query;
pub mod shipping_address_repository;

pub use shipping_address_query::{ShippingAddressQuery, ShippingAddressQueryError};
pub use shipping_address_repository::{
    ShippingAddressRepository, ShippingAddressRepositoryError,
};
