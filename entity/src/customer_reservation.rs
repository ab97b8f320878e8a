use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "customer_reservation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub res_id: i32,
    pub cus_id: i32,
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
        belongs_to = "super::customer::Entity",
        from = "Column::CusId",
        to = "super::customer::Column::CusId"
    )]
    Customer,
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservation.def()
    }
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
