use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::email::EmailAddress;
use crate::domain::employee::errors::EmployeeError;
use crate::domain::employee::models::Employee;
use crate::domain::employee::models::NewEmployee;
use crate::domain::employee::ports::EmployeeRepository;

pub struct PostgresEmployeeRepository {
    pool: PgPool,
}

impl PostgresEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct EmployeeRow {
    id: i64,
    name: String,
    email: String,
    position: String,
    active: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<EmployeeRow> for Employee {
    type Error = EmployeeError;

    fn try_from(row: EmployeeRow) -> Result<Self, Self::Error> {
        Ok(Employee {
            id: row.id,
            name: row.name,
            email: EmailAddress::new(row.email).map_err(|e| {
                EmployeeError::Database(format!("Corrupt email in employees row: {}", e))
            })?,
            position: row.position,
            active: row.active,
            created_at: row.created_at,
        })
    }
}

/// Maps a write error, deriving the conflict from the database's
/// unique-violation signal. Email is the only unique constraint on the
/// table.
fn map_write_error(e: sqlx::Error, email: &str) -> EmployeeError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return EmployeeError::EmailAlreadyExists(email.to_string());
        }
    }
    EmployeeError::Database(e.to_string())
}

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
    async fn create(&self, new: NewEmployee) -> Result<Employee, EmployeeError> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            INSERT INTO employees (name, email, position, active)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, position, active, created_at
            "#,
        )
        .bind(&new.name)
        .bind(new.email.as_str())
        .bind(&new.position)
        .bind(new.active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, new.email.as_str()))?;

        row.try_into()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, EmployeeError> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, name, email, position, active, created_at
            FROM employees
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| EmployeeError::Database(e.to_string()))?;

        row.map(Employee::try_from).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Employee>, EmployeeError> {
        let rows = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, name, email, position, active, created_at
            FROM employees
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| EmployeeError::Database(e.to_string()))?;

        rows.into_iter().map(Employee::try_from).collect()
    }

    async fn update(&self, employee: Employee) -> Result<Option<Employee>, EmployeeError> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            UPDATE employees
            SET name = $2, email = $3, position = $4, active = $5
            WHERE id = $1
            RETURNING id, name, email, position, active, created_at
            "#,
        )
        .bind(employee.id)
        .bind(&employee.name)
        .bind(employee.email.as_str())
        .bind(&employee.position)
        .bind(employee.active)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, employee.email.as_str()))?;

        row.map(Employee::try_from).transpose()
    }

    async fn delete(&self, id: i64) -> Result<Option<Employee>, EmployeeError> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            DELETE FROM employees
            WHERE id = $1
            RETURNING id, name, email, position, active, created_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| EmployeeError::Database(e.to_string()))?;

        row.map(Employee::try_from).transpose()
    }

    async fn count_active(&self) -> Result<i64, EmployeeError> {
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM employees WHERE active = TRUE
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| EmployeeError::Database(e.to_string()))
    }

    async fn upsert(&self, new: NewEmployee) -> Result<(), EmployeeError> {
        sqlx::query(
            r#"
            INSERT INTO employees (name, email, position, active)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (email) DO NOTHING
            "#,
        )
        .bind(&new.name)
        .bind(new.email.as_str())
        .bind(&new.position)
        .bind(new.active)
        .execute(&self.pool)
        .await
        .map_err(|e| EmployeeError::Database(e.to_string()))?;

        Ok(())
    }
}
