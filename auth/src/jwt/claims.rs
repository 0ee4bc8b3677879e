use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Session token claims.
///
/// The token is self-contained: subject, role, and validity window are all
/// encoded in the payload, so verification needs no lookup besides the
/// signing key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier, stringified)
    pub sub: String,

    /// Authorization role tag (e.g. "ADMIN", "USER")
    pub role: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a logged-in user with automatic expiration.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier
    /// * `role` - The user's role tag
    /// * `expiration_hours` - Hours until the token expires
    pub fn for_user(user_id: i64, role: impl Into<String>, expiration_hours: i64) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(expiration_hours);

        Self {
            sub: user_id.to_string(),
            role: role.into(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Check whether the token is expired at the given timestamp.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
