use thiserror::Error;

/// Top-level error for employee operations
#[derive(Debug, Clone, Error)]
pub enum EmployeeError {
    #[error("Employee with ID {0} not found")]
    NotFound(i64),

    /// Derived from the database's unique-violation signal; raw storage
    /// errors never reach the caller for this case.
    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    #[error("Database error: {0}")]
    Database(String),
}
