pub mod category_query_postgres;
pub mod category_repository_postgres;
pub mod product_query_postgres;
pub mod product_repository_postgres;
pub mod sea_orm_entity;

pub use category_query_postgres::CategoryQueryPostgres;
pub use category_repository_postgres::CategoryRepositoryPostgres;
pub use product_query_postgres::ProductQueryPostgres;
pub use product_repository_postgres::ProductRepositoryPostgres;
