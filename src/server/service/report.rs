//! Read-only reports behind the procedure pages.

use sea_orm::DatabaseConnection;

use crate::{
    model::rental::{
        BranchCarsForm, CarDamageForm, CarDto, DamageRecordDto, PerformanceForm,
        PerformanceRowDto,
    },
    server::{
        data::{car::CarRepository, damage_record::DamageRecordRepository, employee::EmployeeRepository},
        error::Error,
        util::form,
    },
};

pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportService<'a> {
    /// Creates a new instance of [`ReportService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Cars stationed at the selected branch
    pub async fn get_branch_cars(&self, form: &BranchCarsForm) -> Result<Vec<CarDto>, Error> {
        let branch_id = form::parse_selection("branch_id", &form.branch_id, "a branch")?;

        let car_repo = CarRepository::new(self.db);
        let cars = car_repo.get_by_branch_id(branch_id).await?;

        Ok(cars.into_iter().map(CarDto::from).collect())
    }

    /// Damage history of the selected car, most recent first
    pub async fn get_car_damage_history(
        &self,
        form: &CarDamageForm,
    ) -> Result<Vec<DamageRecordDto>, Error> {
        let car_id = form::parse_selection("car_id", &form.car_id, "a car")?;

        let damage_repo = DamageRecordRepository::new(self.db);
        let records = damage_repo.get_by_car_id(car_id).await?;

        Ok(records.into_iter().map(DamageRecordDto::from).collect())
    }

    /// Performance report of the selected employee
    pub async fn get_employee_performance(
        &self,
        form: &PerformanceForm,
    ) -> Result<Vec<PerformanceRowDto>, Error> {
        let emp_id = form::parse_selection("emp_id", &form.emp_id, "an employee")?;

        let employee_repo = EmployeeRepository::new(self.db);
        let rows = employee_repo.get_performance_report(emp_id).await?;

        Ok(rows
            .into_iter()
            .map(|row| PerformanceRowDto {
                emp_id: row.emp_id,
                full_name: row.full_name,
                position: row.position,
                salary: row.salary,
                branch_location: row.branch_location,
                since_date: row.since_date,
            })
            .collect())
    }
}
