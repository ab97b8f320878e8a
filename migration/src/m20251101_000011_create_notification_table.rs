use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000005_create_car_table::Car;

static FK_NOTIFICATION_CAR_ID: &str = "fk-notification-car_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Notification::Table)
                    .if_not_exists()
                    .col(pk_auto(Notification::NotificationId))
                    .col(integer(Notification::CarId))
                    .col(text(Notification::Message))
                    .col(date_time(Notification::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_NOTIFICATION_CAR_ID)
                            .from(Notification::Table, Notification::CarId)
                            .to(Car::Table, Car::CarId),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Notification::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Notification {
    Table,
    NotificationId,
    CarId,
    Message,
    CreatedAt,
}
