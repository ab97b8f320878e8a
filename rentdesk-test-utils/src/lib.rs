//! Shared test scaffolding for rentdesk.
//!
//! Tests are written in two phases: a [`TestBuilder`] declares the tables and
//! fixtures a test needs, and the resulting [`TestContext`] exposes the in-memory
//! SQLite connection plus fixture helpers for anything inserted mid-test.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::rental::factory, TestBuilder, TestContext, TestError};
}
