use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq)]
pub struct CustomerDto {
    pub id: i32,
    pub full_name: String,
    pub phone: String,
    pub email: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EmployeeDto {
    pub id: i32,
    pub full_name: String,
    pub position: String,
    pub salary: f64,
    pub email: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BranchDto {
    pub id: i32,
    pub location: String,
    pub phone: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CarDto {
    pub id: i32,
    pub plate_number: String,
    pub brand: String,
    pub model_year: i32,
    pub status: String,
    pub branch_id: Option<i32>,
}

/// A reservation with its first linked customer, car and rental period.
///
/// Links are optional since the three association tables are filled independently.
#[derive(Clone, Debug, PartialEq)]
pub struct ReservationSummaryDto {
    pub id: i32,
    pub res_date: NaiveDate,
    pub customer_name: Option<String>,
    pub plate_number: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DamageRecordDto {
    pub id: i32,
    pub car_id: i32,
    pub description: String,
    pub repair_cost: f64,
    pub record_date: NaiveDate,
}

/// One line of the employee performance report.
#[derive(Clone, Debug, PartialEq)]
pub struct PerformanceRowDto {
    pub emp_id: i32,
    pub full_name: String,
    pub position: String,
    pub salary: f64,
    pub branch_location: Option<String>,
    pub since_date: Option<NaiveDate>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RentalPeriodDto {
    pub id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl RentalPeriodDto {
    /// Length of the rental in days, negative for periods the trigger should have rejected.
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NotificationDto {
    pub id: i32,
    pub car_id: i32,
    pub plate_number: Option<String>,
    pub message: String,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SalaryLogDto {
    pub id: i32,
    pub emp_id: i32,
    pub employee_name: Option<String>,
    pub old_salary: f64,
    pub new_salary: f64,
    pub changed_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InsuranceDto {
    pub id: i32,
    pub car_id: i32,
    pub plate_number: Option<String>,
    pub policy_num: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl InsuranceDto {
    /// A policy is active until its end date has passed.
    pub fn is_active(&self, today: NaiveDate) -> bool {
        self.end_date > today
    }
}

/// Outcome of a salary update.
#[derive(Clone, Debug, PartialEq)]
pub struct SalaryChangeDto {
    pub employee_name: String,
    pub old_salary: f64,
    pub new_salary: f64,
}

/// Catalogue entry of a database trigger.
#[derive(Clone, Debug, PartialEq)]
pub struct TriggerInfoDto {
    pub name: String,
    pub event: String,
    pub table_name: String,
    pub timing: String,
    pub statement: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequesterKind {
    Customer,
    Employee,
}

impl RequesterKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Customer => "Customer",
            Self::Employee => "Employee",
        }
    }

    fn key_prefix(&self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Employee => "employee",
        }
    }
}

/// Directory details of the person who opened a ticket.
///
/// `details` holds the phone number for customers and the position for employees.
#[derive(Clone, Debug, PartialEq)]
pub struct RequesterDto {
    pub kind: RequesterKind,
    pub details: String,
    pub email: Option<String>,
}

/// Entry in the requester drop-down of the ticket form.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectoryUserDto {
    pub id: i32,
    pub name: String,
    pub kind: RequesterKind,
}

impl DirectoryUserDto {
    /// Unique option key across both tables, e.g. `customer_3`.
    pub fn key(&self) -> String {
        format!("{}_{}", self.kind.key_prefix(), self.id)
    }
}

// Forms keep every field as text so that missing or malformed values reach
// validation instead of being rejected by the extractor.

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct CreateReservationForm {
    pub cus_id: String,
    pub car_id: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct BranchCarsForm {
    pub branch_id: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct CarDamageForm {
    pub car_id: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct PerformanceForm {
    pub emp_id: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct RentalPeriodForm {
    pub start_date: String,
    pub end_date: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct DamageRecordForm {
    pub car_id: String,
    pub damage_description: String,
    pub damage_cost: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct SalaryChangeForm {
    pub emp_id: String,
    pub new_salary: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct InsuranceForm {
    pub car_id: String,
    pub policy_num: String,
    pub start_date: String,
    pub end_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn rental_period_length_in_days() {
        let period = RentalPeriodDto {
            id: 1,
            start_date: date(2025, 2, 27),
            end_date: date(2025, 3, 2),
        };

        assert_eq!(period.days(), 3);
    }

    #[test]
    fn insurance_expires_on_end_date() {
        let insurance = InsuranceDto {
            id: 1,
            car_id: 1,
            plate_number: None,
            policy_num: "POL-1".to_string(),
            start_date: date(2025, 1, 1),
            end_date: date(2025, 6, 30),
        };

        assert!(insurance.is_active(date(2025, 6, 29)));
        assert!(!insurance.is_active(date(2025, 6, 30)));
    }

    #[test]
    fn directory_keys_are_prefixed_by_kind() {
        let user = DirectoryUserDto {
            id: 3,
            name: "Jane Doe".to_string(),
            kind: RequesterKind::Employee,
        };

        assert_eq!(user.key(), "employee_3");
    }
}
