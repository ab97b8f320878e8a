use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct CustomerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CustomerRepository<'a, C> {
    /// Creates a new instance of [`CustomerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all customers ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::customer::Model>, DbErr> {
        entity::prelude::Customer::find()
            .order_by_asc(entity::customer::Column::CusId)
            .all(self.db)
            .await
    }

    /// Finds the first customer whose full name is exactly `full_name`
    pub async fn find_by_full_name(
        &self,
        full_name: &str,
    ) -> Result<Option<entity::customer::Model>, DbErr> {
        entity::prelude::Customer::find()
            .filter(entity::customer::Column::FullName.eq(full_name))
            .order_by_asc(entity::customer::Column::CusId)
            .one(self.db)
            .await
    }
}
