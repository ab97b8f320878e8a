use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000001_create_branch_table::Branch, m20251101_000003_create_employee_table::Employee,
};

static FK_EMPLOYEE_BRANCH_EMP_ID: &str = "fk-employee_branch-emp_id";
static FK_EMPLOYEE_BRANCH_BRANCH_ID: &str = "fk-employee_branch-branch_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EmployeeBranch::Table)
                    .if_not_exists()
                    .col(pk_auto(EmployeeBranch::Id))
                    .col(integer(EmployeeBranch::EmpId))
                    .col(integer(EmployeeBranch::BranchId))
                    .col(date(EmployeeBranch::SinceDate))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EMPLOYEE_BRANCH_EMP_ID)
                    .from_tbl(EmployeeBranch::Table)
                    .from_col(EmployeeBranch::EmpId)
                    .to_tbl(Employee::Table)
                    .to_col(Employee::EmpId)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EMPLOYEE_BRANCH_BRANCH_ID)
                    .from_tbl(EmployeeBranch::Table)
                    .from_col(EmployeeBranch::BranchId)
                    .to_tbl(Branch::Table)
                    .to_col(Branch::BranchId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_EMPLOYEE_BRANCH_BRANCH_ID)
                    .table(EmployeeBranch::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_EMPLOYEE_BRANCH_EMP_ID)
                    .table(EmployeeBranch::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EmployeeBranch::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum EmployeeBranch {
    Table,
    Id,
    EmpId,
    BranchId,
    SinceDate,
}
