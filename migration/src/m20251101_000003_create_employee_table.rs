use sea_orm_migration::{prelude::*, schema::*};

static IDX_EMPLOYEE_FULL_NAME: &str = "idx-employee-full_name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employee::Table)
                    .if_not_exists()
                    .col(pk_auto(Employee::EmpId))
                    .col(string(Employee::FullName))
                    .col(string(Employee::Position))
                    .col(double(Employee::Salary))
                    .col(string_null(Employee::Email))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EMPLOYEE_FULL_NAME)
                    .table(Employee::Table)
                    .col(Employee::FullName)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EMPLOYEE_FULL_NAME)
                    .table(Employee::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Employee::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Employee {
    Table,
    EmpId,
    FullName,
    Position,
    Salary,
    Email,
}
