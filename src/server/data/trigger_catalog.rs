use sea_orm::{ConnectionTrait, DbBackend, DbErr, FromQueryResult, Statement};

/// Trigger names as created by the rental triggers migration.
pub mod trigger_name {
    pub static RENTAL_PERIOD_CHECK: &str = "trg_check_rental_period_insert";
    pub static DAMAGE_NOTIFICATION: &str = "trg_damage_notification";
    pub static SALARY_AUDIT: &str = "trg_salary_audit";
    pub static INSURANCE_CHECK: &str = "trg_check_insurance_insert";
}

#[derive(FromQueryResult, Clone, Debug, PartialEq)]
pub struct TriggerRow {
    pub name: String,
    pub event: String,
    pub table_name: String,
    pub timing: String,
    pub statement: String,
}

/// Reads trigger definitions from `information_schema`.
pub struct TriggerCatalogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TriggerCatalogRepository<'a, C> {
    /// Creates a new instance of [`TriggerCatalogRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Triggers of the current schema named `name`
    ///
    /// Only MySQL keeps a trigger catalogue in this form, other backends yield no rows.
    pub async fn find_by_name(&self, name: &str) -> Result<Vec<TriggerRow>, DbErr> {
        if self.db.get_database_backend() != DbBackend::MySql {
            return Ok(Vec::new());
        }

        let stmt = Statement::from_sql_and_values(
            DbBackend::MySql,
            r#"SELECT TRIGGER_NAME AS name,
                      EVENT_MANIPULATION AS event,
                      EVENT_OBJECT_TABLE AS table_name,
                      ACTION_TIMING AS timing,
                      ACTION_STATEMENT AS statement
               FROM information_schema.TRIGGERS
               WHERE TRIGGER_SCHEMA = DATABASE() AND TRIGGER_NAME = ?
               ORDER BY TRIGGER_NAME"#,
            [name.into()],
        );

        TriggerRow::find_by_statement(stmt).all(self.db).await
    }
}
