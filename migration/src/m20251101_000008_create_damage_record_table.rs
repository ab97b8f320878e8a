use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000005_create_car_table::Car;

static IDX_DAMAGE_RECORD_CAR_ID: &str = "idx-damage_record-car_id";
static FK_DAMAGE_RECORD_CAR_ID: &str = "fk-damage_record-car_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DamageRecord::Table)
                    .if_not_exists()
                    .col(pk_auto(DamageRecord::DamageId))
                    .col(integer(DamageRecord::CarId))
                    .col(text(DamageRecord::Description))
                    .col(double(DamageRecord::RepairCost))
                    .col(date(DamageRecord::RecordDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_DAMAGE_RECORD_CAR_ID)
                            .from(DamageRecord::Table, DamageRecord::CarId)
                            .to(Car::Table, Car::CarId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DAMAGE_RECORD_CAR_ID)
                    .table(DamageRecord::Table)
                    .col(DamageRecord::CarId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DamageRecord::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DamageRecord {
    Table,
    DamageId,
    CarId,
    Description,
    RepairCost,
    RecordDate,
}
