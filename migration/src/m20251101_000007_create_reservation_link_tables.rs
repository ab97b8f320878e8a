use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000002_create_customer_table::Customer,
    m20251101_000005_create_car_table::Car,
    m20251101_000006_create_reservation_table::{RentalPeriod, Reservation},
};

static FK_CUSTOMER_RESERVATION_RES_ID: &str = "fk-customer_reservation-res_id";
static FK_CUSTOMER_RESERVATION_CUS_ID: &str = "fk-customer_reservation-cus_id";
static FK_RESERVATION_CAR_RES_ID: &str = "fk-reservation_car-res_id";
static FK_RESERVATION_CAR_CAR_ID: &str = "fk-reservation_car-car_id";
static FK_RESERVATION_RENTAL_PERIOD_RES_ID: &str = "fk-reservation_rental_period-res_id";
static FK_RESERVATION_RENTAL_PERIOD_RENT_ID: &str = "fk-reservation_rental_period-rent_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CustomerReservation::Table)
                    .if_not_exists()
                    .col(pk_auto(CustomerReservation::Id))
                    .col(integer(CustomerReservation::ResId))
                    .col(integer(CustomerReservation::CusId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CUSTOMER_RESERVATION_RES_ID)
                            .from(CustomerReservation::Table, CustomerReservation::ResId)
                            .to(Reservation::Table, Reservation::ResId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CUSTOMER_RESERVATION_CUS_ID)
                            .from(CustomerReservation::Table, CustomerReservation::CusId)
                            .to(Customer::Table, Customer::CusId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ReservationCar::Table)
                    .if_not_exists()
                    .col(pk_auto(ReservationCar::Id))
                    .col(integer(ReservationCar::ResId))
                    .col(integer(ReservationCar::CarId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RESERVATION_CAR_RES_ID)
                            .from(ReservationCar::Table, ReservationCar::ResId)
                            .to(Reservation::Table, Reservation::ResId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RESERVATION_CAR_CAR_ID)
                            .from(ReservationCar::Table, ReservationCar::CarId)
                            .to(Car::Table, Car::CarId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ReservationRentalPeriod::Table)
                    .if_not_exists()
                    .col(pk_auto(ReservationRentalPeriod::Id))
                    .col(integer(ReservationRentalPeriod::ResId))
                    .col(integer(ReservationRentalPeriod::RentId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RESERVATION_RENTAL_PERIOD_RES_ID)
                            .from(ReservationRentalPeriod::Table, ReservationRentalPeriod::ResId)
                            .to(Reservation::Table, Reservation::ResId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RESERVATION_RENTAL_PERIOD_RENT_ID)
                            .from(
                                ReservationRentalPeriod::Table,
                                ReservationRentalPeriod::RentId,
                            )
                            .to(RentalPeriod::Table, RentalPeriod::RentId),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(ReservationRentalPeriod::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ReservationCar::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CustomerReservation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum CustomerReservation {
    Table,
    Id,
    ResId,
    CusId,
}

#[derive(DeriveIden)]
enum ReservationCar {
    Table,
    Id,
    ResId,
    CarId,
}

#[derive(DeriveIden)]
enum ReservationRentalPeriod {
    Table,
    Id,
    ResId,
    RentId,
}
