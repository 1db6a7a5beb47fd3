//! In-memory roster and the supervisor → direct reports grouping.

use std::collections::HashMap;

use super::employee::{Employee, EmployeeId};

/// Every employee in the input, keyed by id, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    employees: Vec<Employee>,
    index: HashMap<EmployeeId, usize>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an employee. A repeated id replaces the earlier record in place
    /// and returns it.
    pub fn insert(&mut self, employee: Employee) -> Option<Employee> {
        match self.index.get(&employee.employee_id) {
            Some(&pos) => Some(std::mem::replace(&mut self.employees[pos], employee)),
            None => {
                self.index
                    .insert(employee.employee_id.clone(), self.employees.len());
                self.employees.push(employee);
                None
            }
        }
    }

    pub fn contains(&self, employee_id: &str) -> bool {
        self.index.contains_key(employee_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.employees.iter()
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

/// Direct reports grouped by supervisor id.
///
/// Supervisor ids are raw strings from the input: they may be empty or point
/// at an id that is not in the [`Roster`]. Groups keep the order in which
/// supervisors were first encountered, and reports keep input order.
#[derive(Debug, Clone, Default)]
pub struct ReportsBySupervisor {
    groups: Vec<(String, Vec<Employee>)>,
    index: HashMap<String, usize>,
}

impl ReportsBySupervisor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `employee` to the reports of `supervisor_id`.
    pub fn push(&mut self, supervisor_id: impl Into<String>, employee: Employee) {
        let supervisor_id = supervisor_id.into();
        match self.index.get(&supervisor_id) {
            Some(&pos) => self.groups[pos].1.push(employee),
            None => {
                self.index.insert(supervisor_id.clone(), self.groups.len());
                self.groups.push((supervisor_id, vec![employee]));
            }
        }
    }

    pub fn is_supervisor(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Employee])> {
        self.groups
            .iter()
            .map(|(id, reports)| (id.as_str(), reports.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
