//! Data access layer repositories.
//!
//! The relational repositories are generic over [`sea_orm::ConnectionTrait`] so that services
//! can run them on a plain connection or inside a transaction. Tickets live in the
//! document store behind the [`ticket::TicketStore`] trait.

pub mod branch;
pub mod car;
pub mod car_insurance;
pub mod customer;
pub mod damage_record;
pub mod employee;
pub mod notification;
pub mod rental_period;
pub mod reservation;
pub mod salary_change_log;
pub mod ticket;
pub mod trigger_catalog;
