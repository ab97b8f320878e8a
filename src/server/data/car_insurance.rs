use chrono::NaiveDate;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder, QuerySelect};

pub struct CarInsuranceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CarInsuranceRepository<'a, C> {
    /// Creates a new instance of [`CarInsuranceRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an insurance policy, validated by `trg_check_insurance_insert` on MySQL
    pub async fn create(
        &self,
        car_id: i32,
        policy_num: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<entity::car_insurance::Model, DbErr> {
        entity::prelude::CarInsurance::insert(entity::car_insurance::ActiveModel {
            car_id: ActiveValue::Set(car_id),
            policy_num: ActiveValue::Set(policy_num.to_string()),
            start_date: ActiveValue::Set(start_date),
            end_date: ActiveValue::Set(end_date),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    /// Gets the `limit` most recent policies with the insured car
    pub async fn get_recent(
        &self,
        limit: u64,
    ) -> Result<Vec<(entity::car_insurance::Model, Option<entity::car::Model>)>, DbErr> {
        entity::prelude::CarInsurance::find()
            .find_also_related(entity::car::Entity)
            .order_by_desc(entity::car_insurance::Column::InsId)
            .limit(limit)
            .all(self.db)
            .await
    }
}
