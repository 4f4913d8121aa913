//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_bakery;
mod m20240601_000002_create_client;
mod m20240601_000003_create_client_bakery;
mod m20240601_000004_create_product;
mod m20240601_000005_create_product_bakery;
mod m20240601_000006_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_bakery::Migration),
            Box::new(m20240601_000002_create_client::Migration),
            Box::new(m20240601_000003_create_client_bakery::Migration),
            Box::new(m20240601_000004_create_product::Migration),
            Box::new(m20240601_000005_create_product_bakery::Migration),
            // Indexes should always be applied last
            Box::new(m20240601_000006_add_indexes::Migration),
        ]
    }
}
