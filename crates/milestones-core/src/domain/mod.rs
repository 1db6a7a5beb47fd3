//! Domain models for direct report milestones.
//!
//! Canonical definitions for the core entities:
//! - `Employee`: One roster row with a parsed hire date
//! - `Roster` / `ReportsBySupervisor`: Loaded input, grouped by supervisor
//! - `MilestoneRecord` / `SupervisorSummary`: Upcoming anniversaries per supervisor
//! - `ReportEntry` / `MilestoneReport`: The artifact handed to presentation

pub mod employee;
pub mod error;
pub mod milestone;
pub mod roster;

// Re-export main types and errors
pub use employee::{Employee, EmployeeId};
pub use error::{Result, RosterError};
pub use milestone::{
    MilestoneRecord, MilestoneReport, NonSupervisorPlaceholder, ReportEntry, SupervisorSummary,
    UpcomingMilestones, NO_DIRECT_REPORTS,
};
pub use roster::{ReportsBySupervisor, Roster};
