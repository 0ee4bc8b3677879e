use admin_service::config::Config;
use admin_service::seed;
use auth::PasswordHasher;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "admin_service=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;

    sqlx::migrate!("./migrations").run(&pg_pool).await?;

    let hasher = PasswordHasher::with_cost(config.hashing.time_cost)?;
    seed::run(&pg_pool, &hasher).await?;

    Ok(())
}
