pub mod service;

pub use service::ReportScheduler;
pub use service::ReportService;
pub use service::ReportSummary;
