pub use sea_orm_migration::prelude::*;

mod m20260610_000001_create_user_table;
mod m20260610_000002_create_location_table;
mod m20260610_000003_create_node_table;
mod m20260611_000004_create_server_table;
mod m20260611_000005_create_backup_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260610_000001_create_user_table::Migration),
            Box::new(m20260610_000002_create_location_table::Migration),
            Box::new(m20260610_000003_create_node_table::Migration),
            Box::new(m20260611_000004_create_server_table::Migration),
            Box::new(m20260611_000005_create_backup_table::Migration),
        ]
    }
}
