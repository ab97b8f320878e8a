//! Dropdown reference lists shared by the procedure and trigger pages.

use sea_orm::DatabaseConnection;

use crate::{
    model::rental::{BranchDto, CarDto, CustomerDto, EmployeeDto},
    server::{
        data::{
            branch::BranchRepository, car::CarRepository, customer::CustomerRepository,
            employee::EmployeeRepository,
        },
        error::Error,
    },
};

pub struct ReferenceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReferenceService<'a> {
    /// Creates a new instance of [`ReferenceService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_customers(&self) -> Result<Vec<CustomerDto>, Error> {
        let customers = CustomerRepository::new(self.db).get_all().await?;

        Ok(customers.into_iter().map(CustomerDto::from).collect())
    }

    pub async fn get_cars(&self) -> Result<Vec<CarDto>, Error> {
        let cars = CarRepository::new(self.db).get_all().await?;

        Ok(cars.into_iter().map(CarDto::from).collect())
    }

    pub async fn get_branches(&self) -> Result<Vec<BranchDto>, Error> {
        let branches = BranchRepository::new(self.db).get_all().await?;

        Ok(branches.into_iter().map(BranchDto::from).collect())
    }

    pub async fn get_employees(&self) -> Result<Vec<EmployeeDto>, Error> {
        let employees = EmployeeRepository::new(self.db).get_all().await?;

        Ok(employees.into_iter().map(EmployeeDto::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use rentdesk_test_utils::prelude::*;

    use crate::server::{error::Error, service::reference::ReferenceService};

    /// Expect every reference list in ID order
    #[tokio::test]
    async fn lists_reference_data() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_rental_tables()
            .with_branch("Downtown")
            .with_customer("Jane Doe")
            .with_customer("Alan Smith")
            .with_employee("Mark Lee", "Manager", 4200.0)
            .with_car("AB-123", Some(1))
            .build()
            .await?;

        let reference_service = ReferenceService::new(&test.db);

        let customers = reference_service.get_customers().await.unwrap();
        let names: Vec<_> = customers.iter().map(|c| c.full_name.as_str()).collect();
        assert_eq!(names, vec!["Jane Doe", "Alan Smith"]);

        let cars = reference_service.get_cars().await.unwrap();
        assert_eq!(cars.len(), 1);
        assert_eq!(cars[0].branch_id, Some(1));

        assert_eq!(reference_service.get_branches().await.unwrap().len(), 1);
        assert_eq!(reference_service.get_employees().await.unwrap()[0].position, "Manager");

        Ok(())
    }

    /// Expect a database error when the tables are missing
    #[tokio::test]
    async fn fails_without_tables() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        let reference_service = ReferenceService::new(&test.db);
        let result = reference_service.get_customers().await;

        assert!(matches!(result, Err(Error::DbErr(_))));

        Ok(())
    }
}
