use std::sync::Arc;

use crate::domain::employee::errors::EmployeeError;
use crate::domain::employee::models::CreateEmployeeCommand;
use crate::domain::employee::models::Employee;
use crate::domain::employee::models::NewEmployee;
use crate::domain::employee::models::UpdateEmployeeCommand;
use crate::domain::employee::ports::EmployeeRepository;

/// Domain service for employee CRUD.
///
/// Role enforcement happens in the authorization middleware, not here: by
/// the time a call arrives the guard has already decided the caller may
/// make it.
pub struct EmployeeService<ER>
where
    ER: EmployeeRepository,
{
    repository: Arc<ER>,
}

impl<ER> EmployeeService<ER>
where
    ER: EmployeeRepository,
{
    pub fn new(repository: Arc<ER>) -> Self {
        Self { repository }
    }

    /// List all employees, newest-created first.
    pub async fn list(&self) -> Result<Vec<Employee>, EmployeeError> {
        self.repository.list_all().await
    }

    /// Retrieve one employee.
    ///
    /// # Errors
    /// * `NotFound` - No record with that id
    pub async fn get(&self, id: i64) -> Result<Employee, EmployeeError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(EmployeeError::NotFound(id))
    }

    /// Create an employee; `active` defaults to true when omitted.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already taken
    pub async fn create(&self, command: CreateEmployeeCommand) -> Result<Employee, EmployeeError> {
        let new = NewEmployee {
            name: command.name,
            email: command.email,
            position: command.position,
            active: command.active.unwrap_or(true),
        };

        self.repository.create(new).await
    }

    /// Apply a partial update; only the supplied fields change.
    ///
    /// Existence check precedes the write. The check-then-act window against
    /// a concurrent delete is accepted: the worst outcome is a surfaced
    /// `NotFound`, never corruption.
    ///
    /// # Errors
    /// * `NotFound` - No record with that id
    /// * `EmailAlreadyExists` - New email is already taken
    pub async fn update(
        &self,
        id: i64,
        command: UpdateEmployeeCommand,
    ) -> Result<Employee, EmployeeError> {
        let mut employee = self.get(id).await?;

        if let Some(name) = command.name {
            employee.name = name;
        }
        if let Some(email) = command.email {
            employee.email = email;
        }
        if let Some(position) = command.position {
            employee.position = position;
        }
        if let Some(active) = command.active {
            employee.active = active;
        }

        self.repository
            .update(employee)
            .await?
            .ok_or(EmployeeError::NotFound(id))
    }

    /// Remove an employee and return the deleted record.
    ///
    /// # Errors
    /// * `NotFound` - No record with that id
    pub async fn remove(&self, id: i64) -> Result<Employee, EmployeeError> {
        self.get(id).await?;

        self.repository
            .delete(id)
            .await?
            .ok_or(EmployeeError::NotFound(id))
    }

    /// Count active employees. Consumed only by the report service.
    pub async fn count_active(&self) -> Result<i64, EmployeeError> {
        self.repository.count_active().await
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::Utc;
    use mockall::mock;

    use super::*;
    use crate::domain::email::EmailAddress;

    mock! {
        pub TestEmployeeRepository {}

        #[async_trait]
        impl EmployeeRepository for TestEmployeeRepository {
            async fn create(&self, new: NewEmployee) -> Result<Employee, EmployeeError>;
            async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, EmployeeError>;
            async fn list_all(&self) -> Result<Vec<Employee>, EmployeeError>;
            async fn update(&self, employee: Employee) -> Result<Option<Employee>, EmployeeError>;
            async fn delete(&self, id: i64) -> Result<Option<Employee>, EmployeeError>;
            async fn count_active(&self) -> Result<i64, EmployeeError>;
            async fn upsert(&self, new: NewEmployee) -> Result<(), EmployeeError>;
        }
    }

    fn sample_employee(id: i64) -> Employee {
        Employee {
            id,
            name: "John Doe".to_string(),
            email: EmailAddress::new("john.doe@company.com").unwrap(),
            position: "Software Engineer".to_string(),
            active: true,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_defaults_active_to_true() {
        let mut repository = MockTestEmployeeRepository::new();
        repository
            .expect_create()
            .withf(|new| new.active)
            .times(1)
            .returning(|new| {
                Ok(Employee {
                    id: 1,
                    name: new.name,
                    email: new.email,
                    position: new.position,
                    active: new.active,
                    created_at: Utc::now(),
                })
            });

        let service = EmployeeService::new(Arc::new(repository));

        let command = CreateEmployeeCommand {
            name: "John Doe".to_string(),
            email: EmailAddress::new("john.doe@company.com").unwrap(),
            position: "Software Engineer".to_string(),
            active: None,
        };

        let employee = service.create(command).await.expect("Create failed");
        assert!(employee.active);
    }

    #[tokio::test]
    async fn test_create_keeps_explicit_inactive() {
        let mut repository = MockTestEmployeeRepository::new();
        repository
            .expect_create()
            .withf(|new| !new.active)
            .times(1)
            .returning(|new| {
                Ok(Employee {
                    id: 3,
                    name: new.name,
                    email: new.email,
                    position: new.position,
                    active: new.active,
                    created_at: Utc::now(),
                })
            });

        let service = EmployeeService::new(Arc::new(repository));

        let command = CreateEmployeeCommand {
            name: "Bob Johnson".to_string(),
            email: EmailAddress::new("bob.johnson@company.com").unwrap(),
            position: "Designer".to_string(),
            active: Some(false),
        };

        let employee = service.create(command).await.expect("Create failed");
        assert!(!employee.active);
    }

    #[tokio::test]
    async fn test_create_duplicate_email() {
        let mut repository = MockTestEmployeeRepository::new();
        repository.expect_create().times(1).returning(|new| {
            Err(EmployeeError::EmailAlreadyExists(
                new.email.as_str().to_string(),
            ))
        });

        let service = EmployeeService::new(Arc::new(repository));

        let command = CreateEmployeeCommand {
            name: "John Clone".to_string(),
            email: EmailAddress::new("john.doe@company.com").unwrap(),
            position: "Software Engineer".to_string(),
            active: None,
        };

        let result = service.create(command).await;
        assert!(matches!(
            result,
            Err(EmployeeError::EmailAlreadyExists(_))
        ));
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let mut repository = MockTestEmployeeRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = EmployeeService::new(Arc::new(repository));

        let result = service.get(99).await;
        assert!(matches!(result, Err(EmployeeError::NotFound(99))));
    }

    #[tokio::test]
    async fn test_update_changes_only_supplied_fields() {
        let existing = sample_employee(5);
        let original_created_at = existing.created_at;

        let mut repository = MockTestEmployeeRepository::new();
        let returned = existing.clone();
        repository
            .expect_find_by_id()
            .withf(|id| *id == 5)
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        repository
            .expect_update()
            .withf(move |e| {
                e.position == "Staff Engineer"
                    && e.name == "John Doe"
                    && e.email.as_str() == "john.doe@company.com"
                    && e.active
                    && e.created_at == original_created_at
            })
            .times(1)
            .returning(|e| Ok(Some(e)));

        let service = EmployeeService::new(Arc::new(repository));

        let command = UpdateEmployeeCommand {
            position: Some("Staff Engineer".to_string()),
            ..Default::default()
        };

        let updated = service.update(5, command).await.expect("Update failed");
        assert_eq!(updated.position, "Staff Engineer");
        assert_eq!(updated.name, "John Doe");
    }

    #[tokio::test]
    async fn test_update_not_found() {
        let mut repository = MockTestEmployeeRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = EmployeeService::new(Arc::new(repository));

        let result = service.update(99, UpdateEmployeeCommand::default()).await;
        assert!(matches!(result, Err(EmployeeError::NotFound(99))));
    }

    #[tokio::test]
    async fn test_remove_returns_deleted_record() {
        let existing = sample_employee(5);

        let mut repository = MockTestEmployeeRepository::new();
        let found = existing.clone();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(found.clone())));

        let deleted = existing.clone();
        repository
            .expect_delete()
            .withf(|id| *id == 5)
            .times(1)
            .returning(move |_| Ok(Some(deleted.clone())));

        let service = EmployeeService::new(Arc::new(repository));

        let removed = service.remove(5).await.expect("Remove failed");
        assert_eq!(removed.id, 5);
        assert_eq!(removed.name, "John Doe");
    }

    #[tokio::test]
    async fn test_remove_not_found() {
        let mut repository = MockTestEmployeeRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = EmployeeService::new(Arc::new(repository));

        let result = service.remove(99).await;
        assert!(matches!(result, Err(EmployeeError::NotFound(99))));
    }

    #[tokio::test]
    async fn test_count_active_delegates() {
        let mut repository = MockTestEmployeeRepository::new();
        repository
            .expect_count_active()
            .times(1)
            .returning(|| Ok(2));

        let service = EmployeeService::new(Arc::new(repository));

        assert_eq!(service.count_active().await.unwrap(), 2);
    }
}
