use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct CarRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CarRepository<'a, C> {
    /// Creates a new instance of [`CarRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all cars ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::car::Model>, DbErr> {
        entity::prelude::Car::find()
            .order_by_asc(entity::car::Column::CarId)
            .all(self.db)
            .await
    }

    /// Gets the cars stationed at a branch ordered by ID
    pub async fn get_by_branch_id(
        &self,
        branch_id: i32,
    ) -> Result<Vec<entity::car::Model>, DbErr> {
        entity::prelude::Car::find()
            .filter(entity::car::Column::BranchId.eq(branch_id))
            .order_by_asc(entity::car::Column::CarId)
            .all(self.db)
            .await
    }
}
