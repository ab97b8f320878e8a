//! Business logic services.
//!
//! Services validate submitted input, coordinate repositories and the ticket store, and
//! convert stored records into the DTOs rendered by the pages and the JSON API.

pub mod directory;
pub mod reference;
pub mod report;
pub mod reservation;
pub mod ticket;
pub mod trigger;
