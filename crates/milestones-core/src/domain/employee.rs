use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Employee identifier as it appears in the roster file.
pub type EmployeeId = String;

/// A single roster row. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Employee {
    pub employee_id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub hire_date: NaiveDate,
}

impl Employee {
    pub fn new(
        employee_id: impl Into<EmployeeId>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        hire_date: NaiveDate,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            hire_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_takes_borrowed_or_owned_ids() {
        let hire = NaiveDate::from_ymd_opt(2011, 3, 24).expect("valid date");
        let emp = Employee::new("7", String::from("Ada"), "Lovelace", hire);
        assert_eq!(emp.employee_id, "7");
        assert_eq!(emp.first_name, "Ada");
        assert_eq!(emp.hire_date, hire);
    }
}
