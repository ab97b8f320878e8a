pub use sea_orm_migration::prelude::*;

mod m20251101_000001_create_branch_table;
mod m20251101_000002_create_customer_table;
mod m20251101_000003_create_employee_table;
mod m20251101_000004_create_employee_branch_table;
mod m20251101_000005_create_car_table;
mod m20251101_000006_create_reservation_table;
mod m20251101_000007_create_reservation_link_tables;
mod m20251101_000008_create_damage_record_table;
mod m20251101_000009_create_car_insurance_table;
mod m20251101_000010_create_salary_change_log_table;
mod m20251101_000011_create_notification_table;
mod m20251101_000012_create_rental_triggers;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_create_branch_table::Migration),
            Box::new(m20251101_000002_create_customer_table::Migration),
            Box::new(m20251101_000003_create_employee_table::Migration),
            Box::new(m20251101_000004_create_employee_branch_table::Migration),
            Box::new(m20251101_000005_create_car_table::Migration),
            Box::new(m20251101_000006_create_reservation_table::Migration),
            Box::new(m20251101_000007_create_reservation_link_tables::Migration),
            Box::new(m20251101_000008_create_damage_record_table::Migration),
            Box::new(m20251101_000009_create_car_insurance_table::Migration),
            Box::new(m20251101_000010_create_salary_change_log_table::Migration),
            Box::new(m20251101_000011_create_notification_table::Migration),
            Box::new(m20251101_000012_create_rental_triggers::Migration),
        ]
    }
}
