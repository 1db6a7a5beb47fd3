//! Direct report milestones core library.
//!
//! Loads an employee roster, then computes for each supervisor the next five
//! 5-year work anniversaries across their direct reports, relative to a
//! reference date. Employees who supervise no one get a placeholder entry.

pub mod aggregate;
pub mod anniversary;
pub mod domain;
pub mod loader;
pub mod metrics;
pub mod obs;
pub mod report;
pub mod reporting;
pub mod telemetry;

pub use aggregate::summarize_supervisor;
pub use anniversary::{
    nth_anniversary, upcoming_anniversaries, MILESTONES_PER_EMPLOYEE, MILESTONE_INTERVAL_YEARS,
};
pub use domain::{
    Employee, EmployeeId, MilestoneRecord, MilestoneReport, NonSupervisorPlaceholder,
    ReportEntry, ReportsBySupervisor, Result, Roster, RosterError, SupervisorSummary,
    UpcomingMilestones, NO_DIRECT_REPORTS,
};
pub use loader::{
    load_roster, parse_date, parse_roster, parse_run_date, LoadedRoster, ROSTER_HEADER,
};
pub use report::{build_report, non_supervisor_placeholders};
pub use reporting::{
    render_report, render_report_json, render_report_text, write_report, ReportFormat,
};

pub use metrics::METRICS;
pub use obs::{
    emit_report_built, emit_roster_loaded, emit_roster_rejected, emit_summary_built, ReportSpan,
};
pub use telemetry::init_tracing;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
