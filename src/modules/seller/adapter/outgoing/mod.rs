pub mod sea_orm_entity;
pub mod seller_query_postgres;
pub mod seller_repository_postgres;

pub use seller_query_postgres::SellerQueryPostgres;
pub use seller_repository_postgres::SellerRepositoryPostgres;
