//! Report assembly: supervisor summaries followed by non-supervisor
//! placeholders.

use chrono::NaiveDate;

use crate::aggregate::summarize_supervisor;
use crate::domain::{MilestoneReport, NonSupervisorPlaceholder, ReportsBySupervisor, Roster};
use crate::loader::LoadedRoster;
use crate::metrics::METRICS;
use crate::obs::emit_report_built;

/// Roster entries that are not used as a supervisor key, in roster order.
///
/// Supervisor ids that never appear in the roster are not placeholders; they
/// only show up as summary subjects.
pub fn non_supervisor_placeholders(
    roster: &Roster,
    reports: &ReportsBySupervisor,
) -> Vec<NonSupervisorPlaceholder> {
    roster
        .iter()
        .filter(|employee| !reports.is_supervisor(&employee.employee_id))
        .map(|employee| NonSupervisorPlaceholder {
            employee_id: employee.employee_id.clone(),
        })
        .collect()
}

/// Build the full report for `reference_date`.
///
/// One summary per distinct supervisor id, in the order supervisors were
/// first encountered in the input, then one placeholder per non-supervisor.
pub fn build_report(loaded: &LoadedRoster, reference_date: NaiveDate) -> MilestoneReport {
    let summaries: Vec<_> = loaded
        .reports
        .iter()
        .map(|(supervisor_id, direct_reports)| {
            summarize_supervisor(supervisor_id, direct_reports, reference_date)
        })
        .collect();

    let placeholders = non_supervisor_placeholders(&loaded.roster, &loaded.reports);
    METRICS.add_placeholders(placeholders.len() as u64);
    emit_report_built(summaries.len(), placeholders.len());

    MilestoneReport {
        summaries,
        placeholders,
    }
}
