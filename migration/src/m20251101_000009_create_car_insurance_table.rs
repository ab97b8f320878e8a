use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000005_create_car_table::Car;

static FK_CAR_INSURANCE_CAR_ID: &str = "fk-car_insurance-car_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CarInsurance::Table)
                    .if_not_exists()
                    .col(pk_auto(CarInsurance::InsId))
                    .col(integer(CarInsurance::CarId))
                    .col(string(CarInsurance::PolicyNum))
                    .col(date(CarInsurance::StartDate))
                    .col(date(CarInsurance::EndDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CAR_INSURANCE_CAR_ID)
                            .from(CarInsurance::Table, CarInsurance::CarId)
                            .to(Car::Table, Car::CarId),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CarInsurance::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CarInsurance {
    Table,
    InsId,
    CarId,
    PolicyNum,
    StartDate,
    EndDate,
}
