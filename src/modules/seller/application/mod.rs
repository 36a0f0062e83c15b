pub mod domain;
pub mod ports;
pub mod seller_use_cases;
pub mod services;
