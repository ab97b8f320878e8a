//! Data transfer objects shared by the HTML views and the JSON API.

pub mod api;
pub mod rental;
pub mod ticket;
