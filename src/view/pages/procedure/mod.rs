pub mod branch_cars;
pub mod car_damage_history;
pub mod create_reservation;
pub mod employee_performance;

pub use branch_cars::{BranchCarsPage, BranchCarsProps};
pub use car_damage_history::{CarDamageHistoryPage, CarDamageHistoryProps};
pub use create_reservation::{CreateReservationPage, CreateReservationProps};
pub use employee_performance::{EmployeePerformancePage, EmployeePerformanceProps};
