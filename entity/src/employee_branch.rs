use sea_orm::entity::prelude::*;

/// Assignment of an employee to the branch they work at.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "employee_branch")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub emp_id: i32,
    pub branch_id: i32,
    pub since_date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::EmpId",
        to = "super::employee::Column::EmpId"
    )]
    Employee,
    #[sea_orm(
        belongs_to = "super::branch::Entity",
        from = "Column::BranchId",
        to = "super::branch::Column::BranchId"
    )]
    Branch,
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl Related<super::branch::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Branch.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
