mod apply_seller_use_case;
mod approve_seller_use_case;
mod resolve_seller_use_case;

pub use apply_seller_use_case::{
    ApplySellerCommand, ApplySellerCommandError, ApplySellerError, ApplySellerUseCase,
};
pub use approve_seller_use_case::{ApproveSellerError, ApproveSellerUseCase};
pub use resolve_seller_use_case::{ResolveSellerError, ResolveSellerUseCase};
