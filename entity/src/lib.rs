//! SeaORM entities for the car rental relational schema.

pub mod prelude;

pub mod branch;
pub mod car;
pub mod car_insurance;
pub mod customer;
pub mod customer_reservation;
pub mod damage_record;
pub mod employee;
pub mod employee_branch;
pub mod notification;
pub mod rental_period;
pub mod reservation;
pub mod reservation_car;
pub mod reservation_rental_period;
pub mod salary_change_log;
