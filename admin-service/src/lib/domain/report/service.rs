use std::sync::Arc;
use std::time::Duration;

use chrono::DateTime;
use chrono::LocalResult;
use chrono::NaiveTime;
use chrono::Utc;
use chrono_tz::Tz;
use tokio_util::sync::CancellationToken;

use crate::domain::employee::errors::EmployeeError;
use crate::domain::employee::ports::EmployeeRepository;
use crate::domain::employee::service::EmployeeService;

/// Result of one report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    /// Report date rendered in the business time zone, dd/mm/yyyy
    pub date: String,
    pub active_employees: i64,
}

/// Emits the daily active-employee summary to the operational log.
///
/// Can be invoked on demand; the scheduler merely calls it once a day.
pub struct ReportService<ER>
where
    ER: EmployeeRepository,
{
    employees: Arc<EmployeeService<ER>>,
    tz: Tz,
}

impl<ER> ReportService<ER>
where
    ER: EmployeeRepository,
{
    pub fn new(employees: Arc<EmployeeService<ER>>, tz: Tz) -> Self {
        Self { employees, tz }
    }

    /// Read the active count and log the fixed-layout summary.
    ///
    /// # Errors
    /// * `Database` - The count query failed
    pub async fn generate_report(&self) -> Result<ReportSummary, EmployeeError> {
        tracing::info!("Starting daily employee report");

        let active_employees = self.employees.count_active().await?;
        let date = Utc::now()
            .with_timezone(&self.tz)
            .format("%d/%m/%Y")
            .to_string();

        tracing::info!("========================================");
        tracing::info!("       DAILY EMPLOYEE REPORT");
        tracing::info!("========================================");
        tracing::info!("Date: {}", date);
        tracing::info!("Active Employees: {}", active_employees);
        tracing::info!("========================================");
        tracing::info!("[EMAIL SIMULATION] Report would be sent to admin@local.com");
        tracing::info!("Daily employee report completed successfully");

        Ok(ReportSummary {
            date,
            active_employees,
        })
    }
}

/// Daily single-fire timer for the report.
///
/// Sleeps until the configured wall-clock time in the business time zone,
/// runs the report, and goes back to sleep. Errors are logged and never
/// propagate; the loop only exits on cancellation. Overlapping runs are not
/// guarded against: a run takes well under a second versus a 24-hour period.
pub struct ReportScheduler<ER>
where
    ER: EmployeeRepository,
{
    service: Arc<ReportService<ER>>,
    run_at: NaiveTime,
    tz: Tz,
    shutdown: CancellationToken,
}

impl<ER> ReportScheduler<ER>
where
    ER: EmployeeRepository,
{
    pub fn new(
        service: Arc<ReportService<ER>>,
        run_at: NaiveTime,
        tz: Tz,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            service,
            run_at,
            tz,
            shutdown,
        }
    }

    /// Main loop: sleep until the next fire time, report, repeat.
    pub async fn run(self) {
        tracing::info!("Report scheduler started");

        loop {
            let sleep_duration = self.duration_until_next_run();
            tracing::info!(
                "Next report trigger in {} minutes",
                sleep_duration.as_secs() / 60
            );

            tokio::select! {
                _ = tokio::time::sleep(sleep_duration) => {}
                _ = self.shutdown.cancelled() => {
                    tracing::info!("Report scheduler received shutdown signal");
                    return;
                }
            }

            if let Err(e) = self.service.generate_report().await {
                tracing::error!("Failed to generate daily report: {}", e);
            }
        }
    }

    fn duration_until_next_run(&self) -> Duration {
        let now = Utc::now().with_timezone(&self.tz);
        (Self::next_run_after(now, self.run_at) - now)
            .to_std()
            .unwrap_or_default()
    }

    /// Next occurrence of `run_at` strictly after `now`, in `now`'s zone.
    fn next_run_after(now: DateTime<Tz>, run_at: NaiveTime) -> DateTime<Tz> {
        let tz = now.timezone();
        let today = now.date_naive();

        let target_date = if now.time() >= run_at {
            // Today's fire time already passed, wait for tomorrow
            today + chrono::Duration::days(1)
        } else {
            today
        };

        match target_date.and_time(run_at).and_local_timezone(tz) {
            LocalResult::Single(dt) => dt,
            LocalResult::Ambiguous(dt, _) => dt,
            // DST gap: the wall-clock time does not exist, push an hour later
            LocalResult::None => (target_date.and_time(run_at) + chrono::Duration::hours(1))
                .and_local_timezone(tz)
                .earliest()
                .unwrap_or_else(|| now + chrono::Duration::days(1)),
        }
    }
}
