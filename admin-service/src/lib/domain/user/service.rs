use std::sync::Arc;

use auth::Authenticator;
use auth::Claims;

use crate::domain::user::errors::AuthError;
use crate::domain::user::models::User;
use crate::domain::user::ports::UserRepository;

/// Outcome of a successful login.
pub struct LoginOutcome {
    pub user: User,
    pub token: String,
}

/// Domain service for login and profile lookup.
///
/// Login is a single-step exchange: verify credentials, issue a token
/// carrying the user's id and role. No multi-step flow, no server-side
/// session state.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
    jwt_expiration_hours: i64,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    pub fn new(
        repository: Arc<UR>,
        authenticator: Arc<Authenticator>,
        jwt_expiration_hours: i64,
    ) -> Self {
        Self {
            repository,
            authenticator,
            jwt_expiration_hours,
        }
    }

    /// Verify credentials and issue a session token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Email unknown or password mismatch; the two
    ///   cases are indistinguishable to the caller
    /// * `Database` - Lookup failed
    /// * `Internal` - Hash parsing or token signing failed
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AuthError> {
        let user = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let claims = Claims::for_user(user.id, user.role.as_str(), self.jwt_expiration_hours);

        let result = self
            .authenticator
            .authenticate(password, &user.password_hash, &claims)
            .map_err(|e| match e {
                auth::AuthenticationError::InvalidCredentials => AuthError::InvalidCredentials,
                other => AuthError::Internal(other.to_string()),
            })?;

        Ok(LoginOutcome {
            user,
            token: result.access_token,
        })
    }

    /// Look up the profile behind an already-verified token subject.
    ///
    /// # Errors
    /// * `UserNotFound` - The subject was deleted after the token was issued
    /// * `Database` - Lookup failed
    pub async fn get_profile(&self, id: i64) -> Result<User, AuthError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AuthError::UserNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::Utc;
    use mockall::mock;

    use super::*;
    use crate::domain::email::EmailAddress;
    use crate::domain::user::models::NewUser;
    use crate::domain::user::models::Role;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn find_by_id(&self, id: i64) -> Result<Option<User>, AuthError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError>;
            async fn upsert(&self, user: NewUser) -> Result<(), AuthError>;
        }
    }

    const SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

    fn stored_user(authenticator: &Authenticator, password: &str, role: Role) -> User {
        User {
            id: 7,
            name: "Administrator".to_string(),
            email: EmailAddress::new("admin@local.com").unwrap(),
            password_hash: authenticator.hash_password(password).unwrap(),
            role,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_login_issues_token_with_id_and_role() {
        let authenticator = Arc::new(Authenticator::new(SECRET));
        let user = stored_user(&authenticator, "Admin@123", Role::Admin);

        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .withf(|email| email == "admin@local.com")
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = AuthService::new(Arc::new(repository), Arc::clone(&authenticator), 8);

        let outcome = service
            .login("admin@local.com", "Admin@123")
            .await
            .expect("Login failed");

        let claims: Claims = authenticator.validate_token(&outcome.token).unwrap();
        assert_eq!(claims.sub, "7");
        assert_eq!(claims.role, "ADMIN");
        assert_eq!(outcome.user.role, Role::Admin);
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let authenticator = Arc::new(Authenticator::new(SECRET));

        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let service = AuthService::new(Arc::new(repository), authenticator, 8);

        let result = service.login("nobody@local.com", "Admin@123").await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_wrong_password_same_error() {
        let authenticator = Arc::new(Authenticator::new(SECRET));
        let user = stored_user(&authenticator, "Admin@123", Role::Admin);

        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = AuthService::new(Arc::new(repository), authenticator, 8);

        let result = service.login("admin@local.com", "User@123").await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_get_profile_success() {
        let authenticator = Arc::new(Authenticator::new(SECRET));
        let user = stored_user(&authenticator, "User@123", Role::User);

        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_id()
            .withf(|id| *id == 7)
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = AuthService::new(Arc::new(repository), authenticator, 8);

        let profile = service.get_profile(7).await.expect("Profile lookup failed");
        assert_eq!(profile.id, 7);
        assert_eq!(profile.role, Role::User);
    }

    #[tokio::test]
    async fn test_get_profile_deleted_subject() {
        let authenticator = Arc::new(Authenticator::new(SECRET));

        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = AuthService::new(Arc::new(repository), authenticator, 8);

        let result = service.get_profile(404).await;
        assert!(matches!(result, Err(AuthError::UserNotFound(404))));
    }
}
