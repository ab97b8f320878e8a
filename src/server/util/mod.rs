//! Utility functions and helpers for server operations.
//!
//! Form field parsing shared by the services and display formatting shared by the
//! page templates.

pub mod form;
pub mod format;
