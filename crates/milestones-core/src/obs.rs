//! Structured observability hooks for a milestones run.
//!
//! - Run-scoped tracing span via the `ReportSpan` RAII guard
//! - Emission functions for key lifecycle events: roster loaded or rejected,
//!   summary built, report built
//!
//! Events go through `tracing`; filtering follows `RUST_LOG`.

use std::path::Path;

use chrono::NaiveDate;
use tracing::info;

/// RAII guard that enters a span tagged with the input file and run date.
///
/// ```ignore
/// let _span = ReportSpan::enter(Path::new("roster.csv"), run_date);
/// // every event below is associated with input=roster.csv run_date=...
/// ```
pub struct ReportSpan {
    _span: tracing::span::EnteredSpan,
}

impl ReportSpan {
    pub fn enter(input: &Path, run_date: NaiveDate) -> Self {
        let span = tracing::info_span!(
            "milestones.report",
            input = %input.display(),
            run_date = %run_date,
        );
        Self {
            _span: span.entered(),
        }
    }
}

/// Emit event: roster parsed successfully.
pub fn emit_roster_loaded(input: &Path, employees: usize, supervisors: usize) {
    info!(
        event = "roster.loaded",
        input = %input.display(),
        employees = employees,
        supervisors = supervisors,
    );
}

/// Emit event: roster rejected (warning level).
pub fn emit_roster_rejected(input: &Path, error: &dyn std::fmt::Display) {
    tracing::warn!(event = "roster.rejected", input = %input.display(), error = %error);
}

/// Emit event: one supervisor summary built.
pub fn emit_summary_built(supervisor_id: &str, direct_reports: usize, milestones: usize) {
    tracing::debug!(
        event = "summary.built",
        supervisor_id = %supervisor_id,
        direct_reports = direct_reports,
        milestones = milestones,
    );
}

/// Emit event: full report assembled.
pub fn emit_report_built(summaries: usize, placeholders: usize) {
    info!(
        event = "report.built",
        summaries = summaries,
        placeholders = placeholders,
    );
}
