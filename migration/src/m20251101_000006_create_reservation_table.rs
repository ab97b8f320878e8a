use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::ResId))
                    .col(date(Reservation::ResDate))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(RentalPeriod::Table)
                    .if_not_exists()
                    .col(pk_auto(RentalPeriod::RentId))
                    .col(date(RentalPeriod::StartDate))
                    .col(date(RentalPeriod::EndDate))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RentalPeriod::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    Table,
    ResId,
    ResDate,
}

#[derive(DeriveIden)]
pub enum RentalPeriod {
    Table,
    RentId,
    StartDate,
    EndDate,
}
