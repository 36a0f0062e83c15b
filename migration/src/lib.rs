pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_users_table;
mod m20260301_000002_create_sellers_table;
mod m20260301_000003_create_catalog_tables;
mod m20260301_000004_create_shipping_addresses_table;
mod m20260301_000005_create_order_tables;
mod m20260301_000006_create_reviews_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_users_table::Migration),
            Box::new(m20260301_000002_create_sellers_table::Migration),
            Box::new(m20260301_000003_create_catalog_tables::Migration),
            Box::new(m20260301_000004_create_shipping_addresses_table::Migration),
            Box::new(m20260301_000005_create_order_tables::Migration),
            Box::new(m20260301_000006_create_reviews_table::Migration),
        ]
    }
}
