mod apply_seller;
mod approve_seller;

pub use apply_seller::{apply_seller_handler, ApplySellerRequestDto};
pub use approve_seller::{approve_seller_handler, ApproveSellerRequestDto};
pub use apply_seller::__path_apply_seller_handler;
pub use approve_seller::__path_approve_seller_handler;
