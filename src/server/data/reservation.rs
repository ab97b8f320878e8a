use chrono::NaiveDate;
use sea_orm::{
    ActiveValue, ConnectionTrait, DbErr, EntityTrait, FromQueryResult, JoinType, QueryOrder,
    QuerySelect, RelationTrait,
};

/// Reservation with the customer, car and rental period linked to it.
#[derive(FromQueryResult, Clone, Debug, PartialEq)]
pub struct ReservationSummaryRow {
    pub res_id: i32,
    pub res_date: NaiveDate,
    pub customer_name: Option<String>,
    pub plate_number: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

pub struct ReservationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReservationRepository<'a, C> {
    /// Creates a new instance of [`ReservationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a reservation dated `res_date` without any links
    pub async fn create(&self, res_date: NaiveDate) -> Result<entity::reservation::Model, DbErr> {
        entity::prelude::Reservation::insert(entity::reservation::ActiveModel {
            res_date: ActiveValue::Set(res_date),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    /// Links a reservation to the customer who placed it
    ///
    /// Fails with a foreign key error when either ID is unknown.
    pub async fn link_customer(&self, res_id: i32, cus_id: i32) -> Result<(), DbErr> {
        entity::prelude::CustomerReservation::insert(entity::customer_reservation::ActiveModel {
            res_id: ActiveValue::Set(res_id),
            cus_id: ActiveValue::Set(cus_id),
            ..Default::default()
        })
        .exec(self.db)
        .await?;

        Ok(())
    }

    /// Links a reservation to the reserved car
    pub async fn link_car(&self, res_id: i32, car_id: i32) -> Result<(), DbErr> {
        entity::prelude::ReservationCar::insert(entity::reservation_car::ActiveModel {
            res_id: ActiveValue::Set(res_id),
            car_id: ActiveValue::Set(car_id),
            ..Default::default()
        })
        .exec(self.db)
        .await?;

        Ok(())
    }

    /// Links a reservation to its rental period
    pub async fn link_rental_period(&self, res_id: i32, rent_id: i32) -> Result<(), DbErr> {
        entity::prelude::ReservationRentalPeriod::insert(
            entity::reservation_rental_period::ActiveModel {
                res_id: ActiveValue::Set(res_id),
                rent_id: ActiveValue::Set(rent_id),
                ..Default::default()
            },
        )
        .exec(self.db)
        .await?;

        Ok(())
    }

    /// Gets the `limit` most recent reservations, newest first
    ///
    /// Missing links leave the corresponding columns empty.
    pub async fn get_recent(&self, limit: u64) -> Result<Vec<ReservationSummaryRow>, DbErr> {
        entity::prelude::Reservation::find()
            .select_only()
            .column(entity::reservation::Column::ResId)
            .column(entity::reservation::Column::ResDate)
            .column_as(entity::customer::Column::FullName, "customer_name")
            .column(entity::car::Column::PlateNumber)
            .column(entity::rental_period::Column::StartDate)
            .column(entity::rental_period::Column::EndDate)
            .join(
                JoinType::LeftJoin,
                entity::customer_reservation::Relation::Reservation.def().rev(),
            )
            .join(
                JoinType::LeftJoin,
                entity::customer_reservation::Relation::Customer.def(),
            )
            .join(
                JoinType::LeftJoin,
                entity::reservation_car::Relation::Reservation.def().rev(),
            )
            .join(JoinType::LeftJoin, entity::reservation_car::Relation::Car.def())
            .join(
                JoinType::LeftJoin,
                entity::reservation_rental_period::Relation::Reservation
                    .def()
                    .rev(),
            )
            .join(
                JoinType::LeftJoin,
                entity::reservation_rental_period::Relation::RentalPeriod.def(),
            )
            .order_by_desc(entity::reservation::Column::ResId)
            .limit(limit)
            .into_model::<ReservationSummaryRow>()
            .all(self.db)
            .await
    }
}
