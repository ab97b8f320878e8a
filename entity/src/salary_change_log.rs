use sea_orm::entity::prelude::*;

/// Audit row written by the `trg_salary_audit` trigger.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "salary_change_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub log_id: i32,
    pub emp_id: i32,
    pub old_salary: f64,
    pub new_salary: f64,
    pub changed_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::EmpId",
        to = "super::employee::Column::EmpId"
    )]
    Employee,
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
