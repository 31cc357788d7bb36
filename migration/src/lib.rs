use sea_orm_migration::prelude::*;
pub use sea_orm_migration::prelude::{MigrationTrait, MigratorTrait};

mod m20240301_000001_create_table;
mod m20240412_184512_add_match_conflicts;
mod m20240520_091733_add_input_statistics;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_table::Migration),
            Box::new(m20240412_184512_add_match_conflicts::Migration),
            Box::new(m20240520_091733_add_input_statistics::Migration),
        ]
    }
}
