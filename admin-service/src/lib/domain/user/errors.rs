use thiserror::Error;

/// Error for Role parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown role: {0}")]
pub struct RoleParseError(pub String);

/// Top-level error for authentication operations
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Unknown email and bad password collapse into this one variant so the
    /// response never reveals which check failed.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The token was valid but its subject no longer resolves (deleted
    /// after issuance).
    #[error("User {0} not found")]
    UserNotFound(i64),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Authentication backend error: {0}")]
    Internal(String),
}
