use async_trait::async_trait;

use crate::domain::user::errors::AuthError;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;

/// Persistence operations for operator accounts.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Retrieve a user by identifier.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AuthError>;

    /// Retrieve a user by email address.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError>;

    /// Insert a user unless one with the same email already exists.
    ///
    /// Used by the seed routine; keying on email keeps it idempotent.
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn upsert(&self, user: NewUser) -> Result<(), AuthError>;
}
