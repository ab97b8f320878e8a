use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "reservation_rental_period")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub res_id: i32,
    pub rent_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::reservation::Entity",
        from = "Column::ResId",
        to = "super::reservation::Column::ResId"
    )]
    Reservation,
    #[sea_orm(
        belongs_to = "super::rental_period::Entity",
        from = "Column::RentId",
        to = "super::rental_period::Column::RentId"
    )]
    RentalPeriod,
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservation.def()
    }
}

impl Related<super::rental_period::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RentalPeriod.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
