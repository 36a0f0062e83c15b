pub mod apply_seller_service;
pub mod approve_seller_service;
pub mod resolve_seller_service;

pub use apply_seller_service::ApplySellerService;
pub use approve_seller_service::ApproveSellerService;
pub use resolve_seller_service::ResolveSellerService;
