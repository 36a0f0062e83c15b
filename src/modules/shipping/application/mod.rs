pub mod domain;
pub mod ports;
pub mod services;
pub mod shipping_use_cases;
