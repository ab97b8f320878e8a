use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_create_branch_table::Branch;

static IDX_CAR_BRANCH_ID: &str = "idx-car-branch_id";
static FK_CAR_BRANCH_ID: &str = "fk-car-branch_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Car::Table)
                    .if_not_exists()
                    .col(pk_auto(Car::CarId))
                    .col(string_uniq(Car::PlateNumber))
                    .col(string(Car::Brand))
                    .col(integer(Car::ModelYear))
                    .col(string(Car::Status).default("available"))
                    .col(integer_null(Car::BranchId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CAR_BRANCH_ID)
                    .table(Car::Table)
                    .col(Car::BranchId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CAR_BRANCH_ID)
                    .from_tbl(Car::Table)
                    .from_col(Car::BranchId)
                    .to_tbl(Branch::Table)
                    .to_col(Branch::BranchId)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CAR_BRANCH_ID)
                    .table(Car::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CAR_BRANCH_ID)
                    .table(Car::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Car::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Car {
    Table,
    CarId,
    PlateNumber,
    Brand,
    ModelYear,
    Status,
    BranchId,
}
