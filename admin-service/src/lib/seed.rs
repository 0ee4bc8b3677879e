use auth::PasswordHasher;
use sqlx::PgPool;

use crate::domain::email::EmailAddress;
use crate::domain::employee::models::NewEmployee;
use crate::domain::employee::ports::EmployeeRepository;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::Role;
use crate::domain::user::ports::UserRepository;
use crate::outbound::repositories::PostgresEmployeeRepository;
use crate::outbound::repositories::PostgresUserRepository;

/// Idempotent seed of the two operator accounts and three sample employees.
///
/// Keyed by email, so re-running never duplicates or overwrites anything.
pub async fn run(pool: &PgPool, hasher: &PasswordHasher) -> anyhow::Result<()> {
    tracing::info!("Starting seed");

    let users = PostgresUserRepository::new(pool.clone());
    let employees = PostgresEmployeeRepository::new(pool.clone());

    users
        .upsert(NewUser {
            name: "Administrator".to_string(),
            email: EmailAddress::new("admin@local.com")?,
            password_hash: hasher.hash("Admin@123")?,
            role: Role::Admin,
        })
        .await?;
    tracing::info!("Seeded ADMIN user: admin@local.com");

    users
        .upsert(NewUser {
            name: "Regular User".to_string(),
            email: EmailAddress::new("user@local.com")?,
            password_hash: hasher.hash("User@123")?,
            role: Role::User,
        })
        .await?;
    tracing::info!("Seeded USER: user@local.com");

    let sample_employees = [
        ("John Doe", "john.doe@company.com", "Software Engineer", true),
        ("Jane Smith", "jane.smith@company.com", "Product Manager", true),
        ("Bob Johnson", "bob.johnson@company.com", "Designer", false),
    ];

    for (name, email, position, active) in sample_employees {
        employees
            .upsert(NewEmployee {
                name: name.to_string(),
                email: EmailAddress::new(email)?,
                position: position.to_string(),
                active,
            })
            .await?;
        tracing::info!("Seeded employee: {} ({})", name, position);
    }

    tracing::info!("Seed completed successfully");
    Ok(())
}
