pub mod order_query_postgres;
pub mod order_repository_postgres;
pub mod sea_orm_entity;

pub use order_query_postgres::OrderQueryPostgres;
pub use order_repository_postgres::OrderRepositoryPostgres;
