//! Database model type aliases.
//!
//! Aliases for the SeaORM models of the `entity` crate, plus their conversions into the
//! display DTOs shared with the views.

use crate::model::rental::{
    BranchDto, CarDto, CustomerDto, DamageRecordDto, EmployeeDto, RentalPeriodDto,
};

/// Registered rental customer.
pub type CustomerModel = entity::customer::Model;

/// Staff member. Salary updates fire the `trg_salary_audit` trigger.
pub type EmployeeModel = entity::employee::Model;

pub type BranchModel = entity::branch::Model;

/// Rental car, optionally stationed at a branch.
pub type CarModel = entity::car::Model;

pub type ReservationModel = entity::reservation::Model;

/// Start and end date of a rental, checked by `trg_check_rental_period_insert`.
pub type RentalPeriodModel = entity::rental_period::Model;

/// Damage noted on a car. Inserts fire the `trg_damage_notification` trigger.
pub type DamageRecordModel = entity::damage_record::Model;

/// Insurance policy of a car, checked by `trg_check_insurance_insert`.
pub type CarInsuranceModel = entity::car_insurance::Model;

pub type SalaryChangeLogModel = entity::salary_change_log::Model;

pub type NotificationModel = entity::notification::Model;

impl From<CustomerModel> for CustomerDto {
    fn from(model: CustomerModel) -> Self {
        Self {
            id: model.cus_id,
            full_name: model.full_name,
            phone: model.phone,
            email: model.email,
        }
    }
}

impl From<EmployeeModel> for EmployeeDto {
    fn from(model: EmployeeModel) -> Self {
        Self {
            id: model.emp_id,
            full_name: model.full_name,
            position: model.position,
            salary: model.salary,
            email: model.email,
        }
    }
}

impl From<BranchModel> for BranchDto {
    fn from(model: BranchModel) -> Self {
        Self {
            id: model.branch_id,
            location: model.location,
            phone: model.phone,
        }
    }
}

impl From<CarModel> for CarDto {
    fn from(model: CarModel) -> Self {
        Self {
            id: model.car_id,
            plate_number: model.plate_number,
            brand: model.brand,
            model_year: model.model_year,
            status: model.status,
            branch_id: model.branch_id,
        }
    }
}

impl From<RentalPeriodModel> for RentalPeriodDto {
    fn from(model: RentalPeriodModel) -> Self {
        Self {
            id: model.rent_id,
            start_date: model.start_date,
            end_date: model.end_date,
        }
    }
}

impl From<DamageRecordModel> for DamageRecordDto {
    fn from(model: DamageRecordModel) -> Self {
        Self {
            id: model.damage_id,
            car_id: model.car_id,
            description: model.description,
            repair_cost: model.repair_cost,
            record_date: model.record_date,
        }
    }
}
