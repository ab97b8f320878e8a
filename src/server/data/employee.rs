use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    FromQueryResult, IntoActiveModel, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait,
};

/// Employee joined with the branch they are assigned to, if any.
#[derive(FromQueryResult, Clone, Debug, PartialEq)]
pub struct EmployeePerformanceRow {
    pub emp_id: i32,
    pub full_name: String,
    pub position: String,
    pub salary: f64,
    pub branch_location: Option<String>,
    pub since_date: Option<NaiveDate>,
}

pub struct EmployeeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EmployeeRepository<'a, C> {
    /// Creates a new instance of [`EmployeeRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all employees ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::employee::Model>, DbErr> {
        entity::prelude::Employee::find()
            .order_by_asc(entity::employee::Column::EmpId)
            .all(self.db)
            .await
    }

    /// Finds an employee by ID
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Employee found
    /// - `Ok(None)` - No employee with the provided ID
    pub async fn find_by_id(&self, emp_id: i32) -> Result<Option<entity::employee::Model>, DbErr> {
        entity::prelude::Employee::find_by_id(emp_id)
            .one(self.db)
            .await
    }

    /// Finds the first employee whose full name is exactly `full_name`
    pub async fn find_by_full_name(
        &self,
        full_name: &str,
    ) -> Result<Option<entity::employee::Model>, DbErr> {
        entity::prelude::Employee::find()
            .filter(entity::employee::Column::FullName.eq(full_name))
            .order_by_asc(entity::employee::Column::EmpId)
            .one(self.db)
            .await
    }

    /// Sets the salary of an employee
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Updated employee
    /// - `Ok(None)` - No employee with the provided ID
    /// - `Err(DbErr)` - Update failed, also when rejected by a database trigger
    pub async fn update_salary(
        &self,
        emp_id: i32,
        salary: f64,
    ) -> Result<Option<entity::employee::Model>, DbErr> {
        let employee = match entity::prelude::Employee::find_by_id(emp_id)
            .one(self.db)
            .await?
        {
            Some(employee) => employee,
            None => return Ok(None),
        };

        let mut employee_am = employee.into_active_model();
        employee_am.salary = ActiveValue::Set(salary);

        let employee = employee_am.update(self.db).await?;

        Ok(Some(employee))
    }

    /// One row per branch assignment of the employee, a single row without branch
    /// details when they are unassigned
    pub async fn get_performance_report(
        &self,
        emp_id: i32,
    ) -> Result<Vec<EmployeePerformanceRow>, DbErr> {
        entity::prelude::Employee::find()
            .select_only()
            .column(entity::employee::Column::EmpId)
            .column(entity::employee::Column::FullName)
            .column(entity::employee::Column::Position)
            .column(entity::employee::Column::Salary)
            .column_as(entity::branch::Column::Location, "branch_location")
            .column(entity::employee_branch::Column::SinceDate)
            .join(
                JoinType::LeftJoin,
                entity::employee_branch::Relation::Employee.def().rev(),
            )
            .join(
                JoinType::LeftJoin,
                entity::employee_branch::Relation::Branch.def(),
            )
            .filter(entity::employee::Column::EmpId.eq(emp_id))
            .order_by_asc(entity::employee_branch::Column::SinceDate)
            .into_model::<EmployeePerformanceRow>()
            .all(self.db)
            .await
    }
}
