pub use super::branch::Entity as Branch;
pub use super::car::Entity as Car;
pub use super::car_insurance::Entity as CarInsurance;
pub use super::customer::Entity as Customer;
pub use super::customer_reservation::Entity as CustomerReservation;
pub use super::damage_record::Entity as DamageRecord;
pub use super::employee::Entity as Employee;
pub use super::employee_branch::Entity as EmployeeBranch;
pub use super::notification::Entity as Notification;
pub use super::rental_period::Entity as RentalPeriod;
pub use super::reservation::Entity as Reservation;
pub use super::reservation_car::Entity as ReservationCar;
pub use super::reservation_rental_period::Entity as ReservationRentalPeriod;
pub use super::salary_change_log::Entity as SalaryChangeLog;
