use sea_orm::DatabaseConnection;

use crate::{
    model::rental::{DirectoryUserDto, RequesterDto, RequesterKind},
    server::{
        data::{customer::CustomerRepository, employee::EmployeeRepository},
        error::Error,
    },
};

/// Looks up people by the display name tickets are filed under.
///
/// Customers take precedence over employees sharing the same full name.
pub struct DirectoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DirectoryService<'a> {
    /// Creates a new instance of [`DirectoryService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Whether a customer or employee has exactly this full name
    pub async fn user_exists(&self, full_name: &str) -> Result<bool, Error> {
        Ok(self.find_requester(full_name).await?.is_some())
    }

    /// Contact details of the customer or employee named `full_name`
    ///
    /// # Returns
    /// - `Ok(Some(RequesterDto))` - Customer with phone and email, or employee with position and email
    /// - `Ok(None)` - Nobody of that name
    /// - `Err(Error::DbErr)` - Lookup failed
    pub async fn find_requester(&self, full_name: &str) -> Result<Option<RequesterDto>, Error> {
        let customer_repo = CustomerRepository::new(self.db);
        let employee_repo = EmployeeRepository::new(self.db);

        if let Some(customer) = customer_repo.find_by_full_name(full_name).await? {
            return Ok(Some(RequesterDto {
                kind: RequesterKind::Customer,
                details: customer.phone,
                email: customer.email,
            }));
        }

        let requester = employee_repo
            .find_by_full_name(full_name)
            .await?
            .map(|employee| RequesterDto {
                kind: RequesterKind::Employee,
                details: employee.position,
                email: employee.email,
            });

        Ok(requester)
    }

    /// All customers and employees, sorted by name
    pub async fn get_users(&self) -> Result<Vec<DirectoryUserDto>, Error> {
        let customer_repo = CustomerRepository::new(self.db);
        let employee_repo = EmployeeRepository::new(self.db);

        let customers = customer_repo.get_all().await?;
        let employees = employee_repo.get_all().await?;

        let mut users: Vec<DirectoryUserDto> = customers
            .into_iter()
            .map(|c| DirectoryUserDto {
                id: c.cus_id,
                name: c.full_name,
                kind: RequesterKind::Customer,
            })
            .chain(employees.into_iter().map(|e| DirectoryUserDto {
                id: e.emp_id,
                name: e.full_name,
                kind: RequesterKind::Employee,
            }))
            .collect();
        users.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(users)
    }
}
