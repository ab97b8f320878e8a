//! Test fixture modules for database record creation.
//!
//! - `rental` - customers, employees, branches, cars and their dependent records

pub mod rental;
