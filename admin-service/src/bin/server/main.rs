use std::sync::Arc;

use admin_service::config::Config;
use admin_service::domain::employee::service::EmployeeService;
use admin_service::domain::report::service::ReportScheduler;
use admin_service::domain::report::service::ReportService;
use admin_service::domain::user::service::AuthService;
use admin_service::inbound::http::router::create_router;
use admin_service::outbound::repositories::PostgresEmployeeRepository;
use admin_service::outbound::repositories::PostgresUserRepository;
use anyhow::Context;
use auth::Authenticator;
use auth::PasswordHasher;
use chrono::NaiveTime;
use chrono_tz::Tz;
use sqlx::postgres::PgPoolOptions;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "admin_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "admin-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        database_url = %config.database.url,
        http_port = config.server.http_port,
        report_run_at = %config.report.run_at,
        report_timezone = %config.report.timezone,
        "Configuration loaded"
    );

    let run_at = NaiveTime::parse_from_str(&config.report.run_at, "%H:%M")
        .with_context(|| format!("invalid report.run_at: {}", config.report.run_at))?;
    let timezone: Tz = config
        .report
        .timezone
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid report.timezone: {e}"))?;

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let password_hasher = PasswordHasher::with_cost(config.hashing.time_cost)?;
    let authenticator = Arc::new(Authenticator::with_hasher(
        config.jwt.secret.as_bytes(),
        password_hasher,
    ));
    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let employee_repository = Arc::new(PostgresEmployeeRepository::new(pg_pool));

    let auth_service = Arc::new(AuthService::new(
        user_repository,
        Arc::clone(&authenticator),
        config.jwt.expiration_hours,
    ));
    let employee_service = Arc::new(EmployeeService::new(employee_repository));

    let report_service = Arc::new(ReportService::new(Arc::clone(&employee_service), timezone));
    let shutdown = CancellationToken::new();
    let scheduler = ReportScheduler::new(report_service, run_at, timezone, shutdown.clone());
    let scheduler_handle = tokio::spawn(scheduler.run());
    tracing::info!(
        run_at = %run_at,
        timezone = %timezone,
        "Report scheduler spawned"
    );

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(auth_service, employee_service, authenticator);

    axum::serve(http_listener, http_application)
        .with_graceful_shutdown(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for shutdown signal");
            }
            tracing::info!("Shutdown signal received");
            shutdown.cancel();
        })
        .await?;

    if let Err(e) = scheduler_handle.await {
        tracing::error!(error = %e, "Report scheduler task failed");
    }
    tracing::info!("Server exited successfully");

    Ok(())
}
