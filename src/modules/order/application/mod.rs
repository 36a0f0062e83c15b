pub mod domain;
pub mod order_use_cases;
pub mod ports;
pub mod services;
