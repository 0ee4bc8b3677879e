//! Authentication utilities library
//!
//! Provides the authentication infrastructure for the admin backend:
//! - Password hashing (Argon2id) with a configurable work factor
//! - JWT session token generation and validation (HS256)
//! - Authentication coordination (verify credentials, issue token)
//!
//! Tokens are stateless: the server signs them once and only ever verifies
//! them afterwards, so there is no server-side session store and no
//! enforceable logout. Rotating the signing key invalidates all outstanding
//! tokens.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::{Claims, JwtHandler};
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = Claims::for_user(1, "ADMIN", 8);
//! let token = handler.encode(&claims).unwrap();
//! let decoded: Claims = handler.decode(&token).unwrap();
//! assert_eq!(decoded.role, "ADMIN");
//! ```
//!
//! ## Complete Login Flow
//! ```
//! use auth::{Authenticator, Claims};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Provisioning: hash the password for storage
//! let hash = auth.hash_password("Admin@123").unwrap();
//!
//! // Login: verify the password and issue a token
//! let claims = Claims::for_user(1, "ADMIN", 8);
//! let result = auth.authenticate("Admin@123", &hash, &claims).unwrap();
//!
//! // Per-request: validate the bearer token
//! let decoded: Claims = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(decoded.sub, "1");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
