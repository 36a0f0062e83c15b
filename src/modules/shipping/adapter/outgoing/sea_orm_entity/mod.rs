pub mod shipping_addresses;
