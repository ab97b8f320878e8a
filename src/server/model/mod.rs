//! Server application models and type definitions.
//!
//! Application state, aliases for the relational entity models and the persisted
//! ticket document types used by the ticket store.

pub mod app;
pub mod db;
pub mod ticket;
