//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context owns an
//! in-memory SQLite database whose tables were generated from the `entity` crate.

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Test context structure returned by `TestBuilder`
///
/// ```ignore
/// let mut test = TestBuilder::new().with_rental_tables().build().await?;
///
/// // Access the database
/// let db = &test.db;
///
/// // Insert fixtures mid-test
/// test.rental().insert_customer("Jane Doe").await?;
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
}

impl TestContext {
    /// Create a new test context backed by a fresh `sqlite::memory:` database.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context without any tables
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db })
    }

    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
