use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000003_create_employee_table::Employee;

static FK_SALARY_CHANGE_LOG_EMP_ID: &str = "fk-salary_change_log-emp_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SalaryChangeLog::Table)
                    .if_not_exists()
                    .col(pk_auto(SalaryChangeLog::LogId))
                    .col(integer(SalaryChangeLog::EmpId))
                    .col(double(SalaryChangeLog::OldSalary))
                    .col(double(SalaryChangeLog::NewSalary))
                    .col(date_time(SalaryChangeLog::ChangedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SALARY_CHANGE_LOG_EMP_ID)
                            .from(SalaryChangeLog::Table, SalaryChangeLog::EmpId)
                            .to(Employee::Table, Employee::EmpId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SalaryChangeLog::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SalaryChangeLog {
    Table,
    LogId,
    EmpId,
    OldSalary,
    NewSalary,
    ChangedAt,
}
