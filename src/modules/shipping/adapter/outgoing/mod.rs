pub mod sea_orm_entity;
pub mod shipping_address_query_postgres;
pub mod shipping_address_repository_postgres;

pub use shipping_address_query_postgres::ShippingAddressQueryPostgres;
pub use shipping_address_repository_postgres::ShippingAddressRepositoryPostgres;
