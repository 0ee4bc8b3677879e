use chrono::DateTime;
use chrono::Utc;

use crate::domain::email::EmailAddress;

/// Managed business record.
///
/// Independent of operator accounts; `created_at` is set once at insert and
/// never changes.
#[derive(Debug, Clone)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: EmailAddress,
    pub position: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Command to create an employee with validated fields.
#[derive(Debug)]
pub struct CreateEmployeeCommand {
    pub name: String,
    pub email: EmailAddress,
    pub position: String,
    /// Defaults to true when omitted from the request
    pub active: Option<bool>,
}

/// Command to update an employee; only the supplied fields change.
#[derive(Debug, Default)]
pub struct UpdateEmployeeCommand {
    pub name: Option<String>,
    pub email: Option<EmailAddress>,
    pub position: Option<String>,
    pub active: Option<bool>,
}

/// Row ready for insert; the database assigns id and created_at.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub name: String,
    pub email: EmailAddress,
    pub position: String,
    pub active: bool,
}
