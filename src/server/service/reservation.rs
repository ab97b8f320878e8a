use chrono::{NaiveDate, Utc};
use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};

use crate::{
    model::rental::{CreateReservationForm, ReservationSummaryDto},
    server::{
        data::{rental_period::RentalPeriodRepository, reservation::ReservationRepository},
        error::{rental::RentalError, Error},
        util::form,
    },
};

/// Number of reservations listed below the reservation form.
pub const RECENT_RESERVATION_LIMIT: u64 = 10;

/// Validated input of [`ReservationService::create_reservation`].
#[derive(Clone, Debug, PartialEq)]
pub struct NewReservation {
    pub cus_id: i32,
    pub car_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl TryFrom<&CreateReservationForm> for NewReservation {
    type Error = RentalError;

    fn try_from(form: &CreateReservationForm) -> Result<Self, Self::Error> {
        if form::any_blank(&[&form.cus_id, &form.car_id, &form.start_date, &form.end_date]) {
            return Err(RentalError::MissingFields);
        }

        Ok(Self {
            cus_id: form::parse_id("cus_id", &form.cus_id)?,
            car_id: form::parse_id("car_id", &form.car_id)?,
            start_date: form::parse_date("start_date", &form.start_date)?,
            end_date: form::parse_date("end_date", &form.end_date)?,
        })
    }
}

pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationService<'a> {
    /// Creates a new instance of [`ReservationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a reservation dated today for a customer and car over the given period.
    ///
    /// The reservation, its rental period and the three link rows are written in one
    /// transaction, so a rejected period or unknown customer or car leaves nothing behind.
    ///
    /// # Returns
    /// - `Ok(i32)` - ID of the new reservation
    /// - `Err(RentalError)` - Blank or malformed field
    /// - `Err(Error::DbErr)` - Insert failed or was rejected by a trigger, transaction rolled back
    pub async fn create_reservation(&self, form: &CreateReservationForm) -> Result<i32, Error> {
        let reservation = NewReservation::try_from(form)?;

        let txn = self.db.begin().await?;

        let res_id = match Self::insert_linked(&txn, &reservation).await {
            Ok(res_id) => res_id,
            Err(err) => {
                txn.rollback().await?;
                return Err(err.into());
            }
        };

        txn.commit().await?;

        tracing::info!(
            res_id = res_id,
            cus_id = reservation.cus_id,
            car_id = reservation.car_id,
            "Created reservation"
        );

        Ok(res_id)
    }

    async fn insert_linked(
        txn: &DatabaseTransaction,
        reservation: &NewReservation,
    ) -> Result<i32, DbErr> {
        let reservation_repo = ReservationRepository::new(txn);
        let rental_period_repo = RentalPeriodRepository::new(txn);

        let res = reservation_repo.create(Utc::now().date_naive()).await?;
        let period = rental_period_repo
            .create(reservation.start_date, reservation.end_date)
            .await?;

        reservation_repo
            .link_customer(res.res_id, reservation.cus_id)
            .await?;
        reservation_repo.link_car(res.res_id, reservation.car_id).await?;
        reservation_repo
            .link_rental_period(res.res_id, period.rent_id)
            .await?;

        Ok(res.res_id)
    }

    /// The most recent reservations, newest first
    pub async fn get_recent_reservations(&self) -> Result<Vec<ReservationSummaryDto>, Error> {
        let reservation_repo = ReservationRepository::new(self.db);

        let rows = reservation_repo.get_recent(RECENT_RESERVATION_LIMIT).await?;

        Ok(rows
            .into_iter()
            .map(|row| ReservationSummaryDto {
                id: row.res_id,
                res_date: row.res_date,
                customer_name: row.customer_name,
                plate_number: row.plate_number,
                start_date: row.start_date,
                end_date: row.end_date,
            })
            .collect())
    }
}
