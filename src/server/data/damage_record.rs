use chrono::NaiveDate;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct DamageRecordRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DamageRecordRepository<'a, C> {
    /// Creates a new instance of [`DamageRecordRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a damage record, firing `trg_damage_notification` on MySQL
    pub async fn create(
        &self,
        car_id: i32,
        description: &str,
        repair_cost: f64,
        record_date: NaiveDate,
    ) -> Result<entity::damage_record::Model, DbErr> {
        entity::prelude::DamageRecord::insert(entity::damage_record::ActiveModel {
            car_id: ActiveValue::Set(car_id),
            description: ActiveValue::Set(description.to_string()),
            repair_cost: ActiveValue::Set(repair_cost),
            record_date: ActiveValue::Set(record_date),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    /// Damage history of a car, most recent record date first
    pub async fn get_by_car_id(
        &self,
        car_id: i32,
    ) -> Result<Vec<entity::damage_record::Model>, DbErr> {
        entity::prelude::DamageRecord::find()
            .filter(entity::damage_record::Column::CarId.eq(car_id))
            .order_by_desc(entity::damage_record::Column::RecordDate)
            .order_by_desc(entity::damage_record::Column::DamageId)
            .all(self.db)
            .await
    }
}
