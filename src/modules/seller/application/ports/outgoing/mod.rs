pub mod seller_query;
pub mod seller_repository;

pub use seller_query::{SellerQuery, SellerQueryError};
pub use seller_repository::{SellerApplication, SellerRepository, SellerRepositoryError};
