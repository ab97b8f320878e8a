//! HTTP controller endpoints.
//!
//! `page` renders the HTML pages of the user and admin panels, `ticket` exposes the support
//! tickets as a JSON API documented with utoipa.

pub mod page;
pub mod ticket;
