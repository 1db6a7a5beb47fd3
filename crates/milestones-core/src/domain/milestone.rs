use chrono::{NaiveDate, NaiveTime};
use serde::{Serialize, Serializer};

use super::employee::EmployeeId;

/// Sentinel rendered in place of a milestone list for employees who supervise no one.
pub const NO_DIRECT_REPORTS: &str = "No direct reports";

/// Format used when rendering anniversary dates (date plus a zero time of day).
const ANNIVERSARY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One upcoming anniversary and the employee it belongs to.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MilestoneRecord {
    pub employee_id: EmployeeId,
    #[serde(with = "anniversary_date")]
    pub anniversary_date: NaiveDate,
}

impl MilestoneRecord {
    pub fn new(employee_id: impl Into<EmployeeId>, anniversary_date: NaiveDate) -> Self {
        Self {
            employee_id: employee_id.into(),
            anniversary_date,
        }
    }
}

/// Up to five upcoming milestones across one supervisor's direct reports.
///
/// # Invariants
///
/// `milestones` is ordered by ascending `anniversary_date`. Records sharing a
/// date stay grouped together in the order they were collected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupervisorSummary {
    pub supervisor_id: String,
    pub milestones: Vec<MilestoneRecord>,
}

/// An employee that supervises no one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonSupervisorPlaceholder {
    pub employee_id: EmployeeId,
}

/// Either a milestone list or the "no direct reports" sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpcomingMilestones {
    Scheduled(Vec<MilestoneRecord>),
    NoDirectReports,
}

impl UpcomingMilestones {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, UpcomingMilestones::NoDirectReports)
    }
}

impl Serialize for UpcomingMilestones {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            UpcomingMilestones::Scheduled(records) => records.serialize(serializer),
            UpcomingMilestones::NoDirectReports => serializer.serialize_str(NO_DIRECT_REPORTS),
        }
    }
}

/// One line of the final report, keyed by `supervisor_id` for compatibility
/// with existing consumers (placeholders carry the employee id there).
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ReportEntry {
    pub supervisor_id: String,
    pub upcoming_milestones: UpcomingMilestones,
}

impl From<SupervisorSummary> for ReportEntry {
    fn from(summary: SupervisorSummary) -> Self {
        Self {
            supervisor_id: summary.supervisor_id,
            upcoming_milestones: UpcomingMilestones::Scheduled(summary.milestones),
        }
    }
}

impl From<NonSupervisorPlaceholder> for ReportEntry {
    fn from(placeholder: NonSupervisorPlaceholder) -> Self {
        Self {
            supervisor_id: placeholder.employee_id,
            upcoming_milestones: UpcomingMilestones::NoDirectReports,
        }
    }
}

/// Final artifact handed to presentation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MilestoneReport {
    /// One summary per supervisor id, in first-encountered input order.
    pub summaries: Vec<SupervisorSummary>,
    /// Employees left over once every supervisor key has been removed.
    pub placeholders: Vec<NonSupervisorPlaceholder>,
}

impl MilestoneReport {
    /// Summaries first, then placeholders.
    pub fn entries(&self) -> Vec<ReportEntry> {
        self.summaries
            .iter()
            .cloned()
            .map(ReportEntry::from)
            .chain(self.placeholders.iter().cloned().map(ReportEntry::from))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.summaries.len() + self.placeholders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Renders a `NaiveDate` as midnight on that day.
pub(crate) mod anniversary_date {
    use super::*;

    pub fn format(date: &NaiveDate) -> String {
        date.and_time(NaiveTime::MIN)
            .format(ANNIVERSARY_FORMAT)
            .to_string()
    }

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(date))
    }
}
