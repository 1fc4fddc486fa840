pub use sea_orm_migration::prelude::*;

mod m20260901_000001_create_user_table;
mod m20260901_000002_create_location_table;
mod m20260901_000003_create_car_table;
mod m20260901_000004_create_rental_table;
mod m20260901_000005_create_login_history_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260901_000001_create_user_table::Migration),
            Box::new(m20260901_000002_create_location_table::Migration),
            Box::new(m20260901_000003_create_car_table::Migration),
            Box::new(m20260901_000004_create_rental_table::Migration),
            Box::new(m20260901_000005_create_login_history_table::Migration),
        ]
    }
}
