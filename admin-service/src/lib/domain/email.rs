use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Email address value type
///
/// Validates format using an RFC 5322 compliant parser. Both users and
/// employees key uniqueness off this value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: impl Into<String>) -> Result<Self, EmailError> {
        let email = email.into();
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
