//! Server application core modules.
//!
//! HTTP routing, configuration, the relational rental database, the MongoDB ticket store and
//! the services tying them to the rendered pages and the JSON API.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
