//! Per-supervisor milestone aggregation.
//!
//! Each direct report contributes its next five anniversaries. Candidates are
//! grouped by date, walked in ascending date order, and the first five
//! records are kept. A date shared by several reports may be cut part-way
//! through when the cap is reached.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::anniversary::{upcoming_anniversaries, MILESTONES_PER_EMPLOYEE};
use crate::domain::{Employee, MilestoneRecord, SupervisorSummary};
use crate::metrics::METRICS;
use crate::obs::emit_summary_built;

/// Build the summary for one supervisor.
///
/// Within a date, employee ids appear in the order the reports were given.
/// With at least one direct report the summary always holds exactly
/// [`MILESTONES_PER_EMPLOYEE`] records.
pub fn summarize_supervisor(
    supervisor_id: &str,
    direct_reports: &[Employee],
    reference_date: NaiveDate,
) -> SupervisorSummary {
    let mut by_date: BTreeMap<NaiveDate, Vec<&str>> = BTreeMap::new();
    for employee in direct_reports {
        for date in upcoming_anniversaries(employee.hire_date, reference_date) {
            by_date
                .entry(date)
                .or_default()
                .push(employee.employee_id.as_str());
        }
    }

    let milestones: Vec<MilestoneRecord> = by_date
        .into_iter()
        .flat_map(|(date, ids)| {
            ids.into_iter()
                .map(move |id| MilestoneRecord::new(id, date))
        })
        .take(MILESTONES_PER_EMPLOYEE)
        .collect();

    emit_summary_built(supervisor_id, direct_reports.len(), milestones.len());
    METRICS.inc_summaries();

    SupervisorSummary {
        supervisor_id: supervisor_id.to_string(),
        milestones,
    }
}
