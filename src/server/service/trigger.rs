//! Writes that exercise the database triggers, and the audit tables they maintain.
//!
//! The triggers only exist on MySQL. Elsewhere the writes go through unchecked and the
//! audit tables stay as they are.

use chrono::Utc;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::rental::{
        DamageRecordDto, DamageRecordForm, InsuranceDto, InsuranceForm, NotificationDto,
        RentalPeriodDto, RentalPeriodForm, SalaryChangeDto, SalaryChangeForm, SalaryLogDto,
        TriggerInfoDto,
    },
    server::{
        data::{
            car_insurance::CarInsuranceRepository, damage_record::DamageRecordRepository,
            employee::EmployeeRepository, notification::NotificationRepository,
            rental_period::RentalPeriodRepository, salary_change_log::SalaryChangeLogRepository,
            trigger_catalog::TriggerCatalogRepository,
        },
        error::{rental::RentalError, Error},
        util::form,
    },
};

/// Rows listed below each trigger form.
pub const RECENT_AUDIT_LIMIT: u64 = 10;

pub struct TriggerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TriggerService<'a> {
    /// Creates a new instance of [`TriggerService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Catalogue entry of the named trigger, empty when the backend keeps no catalogue
    pub async fn get_trigger_info(&self, name: &str) -> Result<Vec<TriggerInfoDto>, Error> {
        let catalog_repo = TriggerCatalogRepository::new(self.db);

        let rows = catalog_repo.find_by_name(name).await?;

        Ok(rows
            .into_iter()
            .map(|row| TriggerInfoDto {
                name: row.name,
                event: row.event,
                table_name: row.table_name,
                timing: row.timing,
                statement: row.statement,
            })
            .collect())
    }

    /// Inserts a rental period, rejected on MySQL when it ends before it starts
    pub async fn add_rental_period(
        &self,
        form: &RentalPeriodForm,
    ) -> Result<RentalPeriodDto, Error> {
        if form::any_blank(&[&form.start_date, &form.end_date]) {
            return Err(RentalError::MissingFields.into());
        }

        let start_date = form::parse_date("start_date", &form.start_date)?;
        let end_date = form::parse_date("end_date", &form.end_date)?;

        let rental_period_repo = RentalPeriodRepository::new(self.db);
        let period = rental_period_repo.create(start_date, end_date).await?;

        Ok(RentalPeriodDto::from(period))
    }

    pub async fn get_recent_rental_periods(&self) -> Result<Vec<RentalPeriodDto>, Error> {
        let rental_period_repo = RentalPeriodRepository::new(self.db);

        let periods = rental_period_repo.get_recent(RECENT_AUDIT_LIMIT).await?;

        Ok(periods.into_iter().map(RentalPeriodDto::from).collect())
    }

    /// Records damage dated today, which makes MySQL write a notification
    pub async fn add_damage_record(
        &self,
        form: &DamageRecordForm,
    ) -> Result<DamageRecordDto, Error> {
        if form::any_blank(&[&form.car_id, &form.damage_description, &form.damage_cost]) {
            return Err(RentalError::MissingFields.into());
        }

        let car_id = form::parse_id("car_id", &form.car_id)?;
        let repair_cost = form::parse_amount("damage_cost", &form.damage_cost)?;

        let damage_repo = DamageRecordRepository::new(self.db);
        let record = damage_repo
            .create(
                car_id,
                form.damage_description.trim(),
                repair_cost,
                Utc::now().date_naive(),
            )
            .await?;

        Ok(DamageRecordDto::from(record))
    }

    pub async fn get_recent_notifications(&self) -> Result<Vec<NotificationDto>, Error> {
        let notification_repo = NotificationRepository::new(self.db);

        let notifications = notification_repo.get_recent(RECENT_AUDIT_LIMIT).await?;

        Ok(notifications
            .into_iter()
            .map(|(notification, car)| NotificationDto {
                id: notification.notification_id,
                car_id: notification.car_id,
                plate_number: car.map(|car| car.plate_number),
                message: notification.message,
                created_at: notification.created_at,
            })
            .collect())
    }

    /// Changes an employee's salary, which makes MySQL write a salary audit entry.
    ///
    /// # Returns
    /// - `Ok(SalaryChangeDto)` - Name with previous and new salary
    /// - `Err(RentalError::EmployeeNotFound)` - No employee with that ID
    /// - `Err(RentalError::SalaryUnchanged)` - New salary equals the current one, nothing written
    pub async fn change_salary(&self, form: &SalaryChangeForm) -> Result<SalaryChangeDto, Error> {
        if form::any_blank(&[&form.emp_id, &form.new_salary]) {
            return Err(RentalError::MissingFields.into());
        }

        let emp_id = form::parse_id("emp_id", &form.emp_id)?;
        let new_salary = form::parse_amount("new_salary", &form.new_salary)?;

        let employee_repo = EmployeeRepository::new(self.db);

        let employee = employee_repo
            .find_by_id(emp_id)
            .await?
            .ok_or(RentalError::EmployeeNotFound(emp_id))?;

        if employee.salary == new_salary {
            return Err(RentalError::SalaryUnchanged.into());
        }

        let updated = employee_repo
            .update_salary(emp_id, new_salary)
            .await?
            .ok_or(RentalError::EmployeeNotFound(emp_id))?;

        tracing::info!(
            emp_id = emp_id,
            old_salary = employee.salary,
            new_salary = updated.salary,
            "Updated employee salary"
        );

        Ok(SalaryChangeDto {
            employee_name: updated.full_name,
            old_salary: employee.salary,
            new_salary: updated.salary,
        })
    }

    pub async fn get_recent_salary_logs(&self) -> Result<Vec<SalaryLogDto>, Error> {
        let salary_log_repo = SalaryChangeLogRepository::new(self.db);

        let logs = salary_log_repo.get_recent(RECENT_AUDIT_LIMIT).await?;

        Ok(logs
            .into_iter()
            .map(|(log, employee)| SalaryLogDto {
                id: log.log_id,
                emp_id: log.emp_id,
                employee_name: employee.map(|employee| employee.full_name),
                old_salary: log.old_salary,
                new_salary: log.new_salary,
                changed_at: log.changed_at,
            })
            .collect())
    }

    /// Adds an insurance policy, rejected on MySQL when its dates are inconsistent
    pub async fn add_insurance(&self, form: &InsuranceForm) -> Result<InsuranceDto, Error> {
        if form::any_blank(&[
            &form.car_id,
            &form.policy_num,
            &form.start_date,
            &form.end_date,
        ]) {
            return Err(RentalError::MissingFields.into());
        }

        let car_id = form::parse_id("car_id", &form.car_id)?;
        let start_date = form::parse_date("start_date", &form.start_date)?;
        let end_date = form::parse_date("end_date", &form.end_date)?;

        let insurance_repo = CarInsuranceRepository::new(self.db);
        let insurance = insurance_repo
            .create(car_id, form.policy_num.trim(), start_date, end_date)
            .await?;

        Ok(InsuranceDto {
            id: insurance.ins_id,
            car_id: insurance.car_id,
            plate_number: None,
            policy_num: insurance.policy_num,
            start_date: insurance.start_date,
            end_date: insurance.end_date,
        })
    }

    pub async fn get_recent_insurances(&self) -> Result<Vec<InsuranceDto>, Error> {
        let insurance_repo = CarInsuranceRepository::new(self.db);

        let insurances = insurance_repo.get_recent(RECENT_AUDIT_LIMIT).await?;

        Ok(insurances
            .into_iter()
            .map(|(insurance, car)| InsuranceDto {
                id: insurance.ins_id,
                car_id: insurance.car_id,
                plate_number: car.map(|car| car.plate_number),
                policy_num: insurance.policy_num,
                start_date: insurance.start_date,
                end_date: insurance.end_date,
            })
            .collect())
    }
}
