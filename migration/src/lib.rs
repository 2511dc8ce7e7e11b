pub use sea_orm_migration::prelude::*;

mod m20261016_000001_create_customer_table;
mod m20261016_000002_create_address_table;
mod m20261016_000003_create_order_sequence_table;
mod m20261016_000004_create_pilotes_order_table;
mod m20261016_000005_seed_customers;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261016_000001_create_customer_table::Migration),
            Box::new(m20261016_000002_create_address_table::Migration),
            Box::new(m20261016_000003_create_order_sequence_table::Migration),
            Box::new(m20261016_000004_create_pilotes_order_table::Migration),
            Box::new(m20261016_000005_seed_customers::Migration),
        ]
    }
}
