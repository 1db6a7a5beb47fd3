use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::domain::milestone::anniversary_date;
use crate::domain::{MilestoneReport, UpcomingMilestones, NO_DIRECT_REPORTS};

/// Output format for a rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => f.write_str("text"),
            ReportFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "plain" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(format!("unknown report format '{}' (expected text or json)", other)),
        }
    }
}

/// Render the plain-text report.
pub fn render_report_text(report: &MilestoneReport) -> String {
    let mut out = String::new();
    out.push_str("Plain Text\n");
    for entry in report.entries() {
        out.push_str(&format!("supervisor_id: {}\n", entry.supervisor_id));
        match &entry.upcoming_milestones {
            UpcomingMilestones::Scheduled(records) => {
                out.push_str("  upcoming_milestones:\n");
                for record in records {
                    out.push_str(&format!(
                        "    - employee_id: {}, anniversary_date: {}\n",
                        record.employee_id,
                        anniversary_date::format(&record.anniversary_date)
                    ));
                }
            }
            UpcomingMilestones::NoDirectReports => {
                out.push_str(&format!("  upcoming_milestones: {}\n", NO_DIRECT_REPORTS));
            }
        }
    }
    out
}

/// Render the report as a pretty JSON array of entries.
pub fn render_report_json(report: &MilestoneReport) -> Result<String> {
    let mut json =
        serde_json::to_string_pretty(&report.entries()).context("serialize milestone report")?;
    json.push('\n');
    Ok(json)
}

pub fn render_report(report: &MilestoneReport, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_report_text(report)),
        ReportFormat::Json => render_report_json(report),
    }
}

/// Write the rendered report to `path`.
pub fn write_report(path: &Path, report: &MilestoneReport, format: ReportFormat) -> Result<()> {
    let content = render_report(report, format)?;
    std::fs::write(path, content).with_context(|| format!("write {:?}", path))?;
    Ok(())
}
