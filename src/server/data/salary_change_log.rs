use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder, QuerySelect};

pub struct SalaryChangeLogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SalaryChangeLogRepository<'a, C> {
    /// Creates a new instance of [`SalaryChangeLogRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the `limit` most recent salary audit entries with the employee they concern
    pub async fn get_recent(
        &self,
        limit: u64,
    ) -> Result<Vec<(entity::salary_change_log::Model, Option<entity::employee::Model>)>, DbErr>
    {
        entity::prelude::SalaryChangeLog::find()
            .find_also_related(entity::employee::Entity)
            .order_by_desc(entity::salary_change_log::Column::LogId)
            .limit(limit)
            .all(self.db)
            .await
    }
}
