pub mod auth;
pub mod cart;
pub mod catalog;
pub mod order;
pub mod review;
pub mod seller;
pub mod shipping;
