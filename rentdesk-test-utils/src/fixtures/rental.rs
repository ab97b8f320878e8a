use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn rental<'a>(&'a mut self) -> RentalFixtures<'a> {
        RentalFixtures { setup: self }
    }
}

pub struct RentalFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> RentalFixtures<'a> {
    pub async fn insert_branch(&self, location: &str) -> Result<entity::branch::Model, TestError> {
        Ok(entity::prelude::Branch::insert(entity::branch::ActiveModel {
            location: ActiveValue::Set(location.to_string()),
            phone: ActiveValue::Set("+1 555 0100".to_string()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_customer(
        &self,
        full_name: &str,
    ) -> Result<entity::customer::Model, TestError> {
        Ok(
            entity::prelude::Customer::insert(entity::customer::ActiveModel {
                full_name: ActiveValue::Set(full_name.to_string()),
                phone: ActiveValue::Set("+1 555 0101".to_string()),
                email: ActiveValue::Set(Some(factory::email_for(full_name))),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_employee(
        &self,
        full_name: &str,
        position: &str,
        salary: f64,
    ) -> Result<entity::employee::Model, TestError> {
        Ok(
            entity::prelude::Employee::insert(entity::employee::ActiveModel {
                full_name: ActiveValue::Set(full_name.to_string()),
                position: ActiveValue::Set(position.to_string()),
                salary: ActiveValue::Set(salary),
                email: ActiveValue::Set(Some(factory::email_for(full_name))),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_car(
        &self,
        plate_number: &str,
        branch_id: Option<i32>,
    ) -> Result<entity::car::Model, TestError> {
        Ok(entity::prelude::Car::insert(entity::car::ActiveModel {
            plate_number: ActiveValue::Set(plate_number.to_string()),
            brand: ActiveValue::Set("Toyota".to_string()),
            model_year: ActiveValue::Set(2022),
            status: ActiveValue::Set("available".to_string()),
            branch_id: ActiveValue::Set(branch_id),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn assign_employee_to_branch(
        &self,
        emp_id: i32,
        branch_id: i32,
        since_date: NaiveDate,
    ) -> Result<entity::employee_branch::Model, TestError> {
        Ok(
            entity::prelude::EmployeeBranch::insert(entity::employee_branch::ActiveModel {
                emp_id: ActiveValue::Set(emp_id),
                branch_id: ActiveValue::Set(branch_id),
                since_date: ActiveValue::Set(since_date),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_damage_record(
        &self,
        car_id: i32,
        description: &str,
        repair_cost: f64,
        record_date: NaiveDate,
    ) -> Result<entity::damage_record::Model, TestError> {
        Ok(
            entity::prelude::DamageRecord::insert(entity::damage_record::ActiveModel {
                car_id: ActiveValue::Set(car_id),
                description: ActiveValue::Set(description.to_string()),
                repair_cost: ActiveValue::Set(repair_cost),
                record_date: ActiveValue::Set(record_date),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a notification row the way the damage trigger would.
    pub async fn insert_notification(
        &self,
        car_id: i32,
        message: &str,
    ) -> Result<entity::notification::Model, TestError> {
        Ok(
            entity::prelude::Notification::insert(entity::notification::ActiveModel {
                car_id: ActiveValue::Set(car_id),
                message: ActiveValue::Set(message.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a salary audit row the way the salary trigger would.
    pub async fn insert_salary_change_log(
        &self,
        emp_id: i32,
        old_salary: f64,
        new_salary: f64,
    ) -> Result<entity::salary_change_log::Model, TestError> {
        Ok(
            entity::prelude::SalaryChangeLog::insert(entity::salary_change_log::ActiveModel {
                emp_id: ActiveValue::Set(emp_id),
                old_salary: ActiveValue::Set(old_salary),
                new_salary: ActiveValue::Set(new_salary),
                changed_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}

pub mod factory {
    //! Pure helpers for building fixture values without database interaction.

    use chrono::NaiveDate;

    use crate::error::TestError;

    /// Derive a deterministic email address from a display name.
    pub fn email_for(full_name: &str) -> String {
        let local: String = full_name
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(".")
            .to_lowercase();

        format!("{}@example.com", local)
    }

    /// Build a calendar date, failing the test for impossible values.
    pub fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate, TestError> {
        NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            TestError::InvalidFixture(format!("{:04}-{:02}-{:02}", year, month, day))
        })
    }
}
