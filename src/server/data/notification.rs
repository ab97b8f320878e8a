use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder, QuerySelect};

pub struct NotificationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NotificationRepository<'a, C> {
    /// Creates a new instance of [`NotificationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the `limit` most recent notifications with the car they concern
    pub async fn get_recent(
        &self,
        limit: u64,
    ) -> Result<Vec<(entity::notification::Model, Option<entity::car::Model>)>, DbErr> {
        entity::prelude::Notification::find()
            .find_also_related(entity::car::Entity)
            .order_by_desc(entity::notification::Column::NotificationId)
            .limit(limit)
            .all(self.db)
            .await
    }
}
