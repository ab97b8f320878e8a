//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! Tables and fixtures are queued by the builder methods and created in order during `build()`,
//! so auto-increment identifiers are predictable: the first customer queued gets ID 1, and so on.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_rental_tables: bool,

    branches: Vec<String>,
    customers: Vec<String>,
    employees: Vec<(String, String, f64)>, // (full_name, position, salary)
    cars: Vec<(String, Option<i32>)>,      // (plate_number, branch_id)
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_rental_tables: false,
            branches: Vec::new(),
            customers: Vec::new(),
            employees: Vec::new(),
            cars: Vec::new(),
        }
    }

    /// Add every table of the rental schema to the test database.
    ///
    /// Tables are created parents first so that foreign key definitions resolve.
    pub fn with_rental_tables(mut self) -> Self {
        self.include_rental_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rentdesk_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), rentdesk_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Customer)
    ///     .with_table(Employee)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a branch located at `location`.
    pub fn with_branch(mut self, location: &str) -> Self {
        self.branches.push(location.to_string());
        self
    }

    /// Insert a customer named `full_name`.
    pub fn with_customer(mut self, full_name: &str) -> Self {
        self.customers.push(full_name.to_string());
        self
    }

    /// Insert an employee.
    pub fn with_employee(mut self, full_name: &str, position: &str, salary: f64) -> Self {
        self.employees
            .push((full_name.to_string(), position.to_string(), salary));
        self
    }

    /// Insert a car, optionally stationed at a branch queued earlier.
    pub fn with_car(mut self, plate_number: &str, branch_id: Option<i32>) -> Self {
        self.cars.push((plate_number.to_string(), branch_id));
        self
    }

    /// Build the test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_rental_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Branch),
                schema.create_table_from_entity(entity::prelude::Customer),
                schema.create_table_from_entity(entity::prelude::Employee),
                schema.create_table_from_entity(entity::prelude::EmployeeBranch),
                schema.create_table_from_entity(entity::prelude::Car),
                schema.create_table_from_entity(entity::prelude::Reservation),
                schema.create_table_from_entity(entity::prelude::RentalPeriod),
                schema.create_table_from_entity(entity::prelude::CustomerReservation),
                schema.create_table_from_entity(entity::prelude::ReservationCar),
                schema.create_table_from_entity(entity::prelude::ReservationRentalPeriod),
                schema.create_table_from_entity(entity::prelude::DamageRecord),
                schema.create_table_from_entity(entity::prelude::CarInsurance),
                schema.create_table_from_entity(entity::prelude::SalaryChangeLog),
                schema.create_table_from_entity(entity::prelude::Notification),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for location in self.branches {
            setup.rental().insert_branch(&location).await?;
        }

        for full_name in self.customers {
            setup.rental().insert_customer(&full_name).await?;
        }

        for (full_name, position, salary) in self.employees {
            setup
                .rental()
                .insert_employee(&full_name, &position, salary)
                .await?;
        }

        for (plate_number, branch_id) in self.cars {
            setup.rental().insert_car(&plate_number, branch_id).await?;
        }

        Ok(setup)
    }
}
