use sea_orm_migration::{prelude::*, sea_orm::DatabaseBackend};

/// `(name, create statement)` for every trigger owned by this migration.
///
/// The statements use MySQL trigger syntax and are skipped on other backends.
const TRIGGERS: [(&str, &str); 4] = [
    (
        "trg_check_rental_period_insert",
        r#"
CREATE TRIGGER trg_check_rental_period_insert
BEFORE INSERT ON rental_period
FOR EACH ROW
BEGIN
    IF NEW.end_date < NEW.start_date THEN
        SIGNAL SQLSTATE '45000'
            SET MESSAGE_TEXT = 'Rental period end date cannot be before its start date';
    END IF;
END
"#,
    ),
    (
        "trg_damage_notification",
        r#"
CREATE TRIGGER trg_damage_notification
AFTER INSERT ON damage_record
FOR EACH ROW
BEGIN
    INSERT INTO notification (car_id, message, created_at)
    VALUES (
        NEW.car_id,
        CONCAT('Damage recorded: ', NEW.description, ' (repair cost: $', FORMAT(NEW.repair_cost, 2), ')'),
        NOW()
    );
END
"#,
    ),
    (
        "trg_salary_audit",
        r#"
CREATE TRIGGER trg_salary_audit
AFTER UPDATE ON employee
FOR EACH ROW
BEGIN
    IF OLD.salary <> NEW.salary THEN
        INSERT INTO salary_change_log (emp_id, old_salary, new_salary, changed_at)
        VALUES (NEW.emp_id, OLD.salary, NEW.salary, NOW());
    END IF;
END
"#,
    ),
    (
        "trg_check_insurance_insert",
        r#"
CREATE TRIGGER trg_check_insurance_insert
BEFORE INSERT ON car_insurance
FOR EACH ROW
BEGIN
    IF NEW.end_date <= NEW.start_date THEN
        SIGNAL SQLSTATE '45000'
            SET MESSAGE_TEXT = 'Insurance end date must be after its start date';
    END IF;
END
"#,
    ),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if manager.get_database_backend() != DatabaseBackend::MySql {
            return Ok(());
        }

        let db = manager.get_connection();
        for (_, statement) in TRIGGERS {
            db.execute_unprepared(statement).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if manager.get_database_backend() != DatabaseBackend::MySql {
            return Ok(());
        }

        let db = manager.get_connection();
        for (name, _) in TRIGGERS {
            db.execute_unprepared(&format!("DROP TRIGGER IF EXISTS {}", name))
                .await?;
        }

        Ok(())
    }
}
