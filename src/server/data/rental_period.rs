use chrono::NaiveDate;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder, QuerySelect};

pub struct RentalPeriodRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RentalPeriodRepository<'a, C> {
    /// Creates a new instance of [`RentalPeriodRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a rental period
    ///
    /// On MySQL `trg_check_rental_period_insert` rejects an end date before the start date.
    pub async fn create(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<entity::rental_period::Model, DbErr> {
        entity::prelude::RentalPeriod::insert(entity::rental_period::ActiveModel {
            start_date: ActiveValue::Set(start_date),
            end_date: ActiveValue::Set(end_date),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    /// Gets the `limit` most recently inserted rental periods, newest first
    pub async fn get_recent(&self, limit: u64) -> Result<Vec<entity::rental_period::Model>, DbErr> {
        entity::prelude::RentalPeriod::find()
            .order_by_desc(entity::rental_period::Column::RentId)
            .limit(limit)
            .all(self.db)
            .await
    }
}
