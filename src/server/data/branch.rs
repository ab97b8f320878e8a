use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

/// Read access to the `branch` table for the reservation and report dropdowns.
pub struct BranchRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BranchRepository<'a, C> {
    /// Creates a new instance of [`BranchRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all branches ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::branch::Model>, DbErr> {
        entity::prelude::Branch::find()
            .order_by_asc(entity::branch::Column::BranchId)
            .all(self.db)
            .await
    }
}
