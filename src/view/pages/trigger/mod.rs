pub mod damage_notification;
pub mod insurance_check;
pub mod rental_period;
pub mod salary_audit;

pub use damage_notification::{DamageNotificationPage, DamageNotificationProps};
pub use insurance_check::{InsuranceCheckPage, InsuranceCheckProps};
pub use rental_period::{RentalPeriodPage, RentalPeriodProps};
pub use salary_audit::{SalaryAuditPage, SalaryAuditProps};
