use async_trait::async_trait;

use crate::domain::employee::errors::EmployeeError;
use crate::domain::employee::models::Employee;
use crate::domain::employee::models::NewEmployee;

/// Persistence operations for employee records.
///
/// The database's unique constraint on email is the final authority; every
/// write maps its violation signal to `EmailAlreadyExists`.
#[async_trait]
pub trait EmployeeRepository: Send + Sync + 'static {
    /// Persist a new employee.
    ///
    /// # Returns
    /// The created record with server-assigned id and created_at
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already taken
    /// * `Database` - Database operation failed
    async fn create(&self, new: NewEmployee) -> Result<Employee, EmployeeError>;

    /// Retrieve an employee by identifier.
    ///
    /// # Returns
    /// Optional record (None if not found)
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, EmployeeError>;

    /// Retrieve all employees, newest-created first.
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Employee>, EmployeeError>;

    /// Update an existing employee with the entity's current field values.
    ///
    /// # Returns
    /// Optional updated record (None if the id does not exist)
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - New email is already taken
    /// * `Database` - Database operation failed
    async fn update(&self, employee: Employee) -> Result<Option<Employee>, EmployeeError>;

    /// Remove an employee.
    ///
    /// # Returns
    /// Optional deleted record (None if the id does not exist)
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn delete(&self, id: i64) -> Result<Option<Employee>, EmployeeError>;

    /// Count employees with `active = true`.
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn count_active(&self) -> Result<i64, EmployeeError>;

    /// Insert an employee unless one with the same email already exists.
    ///
    /// Used by the seed routine; keying on email keeps it idempotent.
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn upsert(&self, new: NewEmployee) -> Result<(), EmployeeError>;
}
