//! Roster loading from the employee CSV file.
//!
//! The first line must be exactly [`ROSTER_HEADER`] (trailing whitespace is
//! ignored). Every following row is `employee_id, first_name, last_name,
//! hire_date, supervisor_id`; extra trailing columns are ignored. Rows are
//! numbered from 0, starting at the first row after the header. Loading
//! stops at the first bad row and no partial roster is returned.

use std::path::Path;
use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use tracing::{debug, warn};

use crate::domain::error::DATE_FORMAT;
use crate::domain::{Employee, ReportsBySupervisor, Result, Roster, RosterError};
use crate::metrics::METRICS;
use crate::obs::{emit_roster_loaded, emit_roster_rejected};

/// Required header row of the roster file.
pub const ROSTER_HEADER: &str = "employee_id,first_name,last_name,hire_date,supervisor_id";

const FIELD_COUNT: usize = 5;

/// A successfully parsed roster file.
#[derive(Debug, Clone, Default)]
pub struct LoadedRoster {
    /// Every employee, supervisors included.
    pub roster: Roster,
    /// Direct reports keyed by the raw `supervisor_id` column.
    pub reports: ReportsBySupervisor,
}

/// Four-digit year, then a one or two digit month and day. `%Y` alone also
/// accepts signed, short and space-padded years.
const DATE_SHAPE: &str = r"^[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}$";

fn date_shape() -> Option<&'static Regex> {
    static SHAPE: OnceLock<Option<Regex>> = OnceLock::new();
    SHAPE.get_or_init(|| Regex::new(DATE_SHAPE).ok()).as_ref()
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if !date_shape().is_some_and(|re| re.is_match(value)) {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Parse the run (reference) date supplied on the command line.
pub fn parse_run_date(value: &str) -> Result<NaiveDate> {
    parse_date(value).ok_or_else(|| RosterError::InvalidRunDate {
        value: value.to_string(),
    })
}

/// Load and validate the roster file at `path`.
pub fn load_roster(path: &Path) -> Result<LoadedRoster> {
    if !path.is_file() {
        return Err(RosterError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    match parse_roster(path, &content) {
        Ok(loaded) => {
            emit_roster_loaded(path, loaded.roster.len(), loaded.reports.len());
            Ok(loaded)
        }
        Err(err) => {
            emit_roster_rejected(path, &err);
            Err(err)
        }
    }
}

/// Parse roster file contents. `source` is only used in error messages.
pub fn parse_roster(source: &Path, content: &str) -> Result<LoadedRoster> {
    let (header, body) = content.split_once('\n').unwrap_or((content, ""));
    if header.trim_end() != ROSTER_HEADER {
        return Err(RosterError::HeaderMismatch {
            path: source.to_path_buf(),
            expected: ROSTER_HEADER.to_string(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(body.as_bytes());

    let mut loaded = LoadedRoster::default();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let employee = parse_row(source, row, &record)?;
        let supervisor_id = &record[4];

        debug!(
            row,
            employee_id = %employee.employee_id,
            supervisor_id = %supervisor_id,
            "roster row"
        );
        loaded.reports.push(supervisor_id, employee.clone());
        if let Some(previous) = loaded.roster.insert(employee) {
            warn!(
                row,
                employee_id = %previous.employee_id,
                "duplicate employee id, keeping the later row"
            );
        }
        METRICS.inc_rows_loaded();
    }

    Ok(loaded)
}

fn parse_row(source: &Path, row: usize, record: &csv::StringRecord) -> Result<Employee> {
    if record.len() < FIELD_COUNT {
        return Err(RosterError::MalformedRow {
            row,
            fields: record.len(),
        });
    }

    let raw_hire_date = &record[3];
    let hire_date = parse_date(raw_hire_date).ok_or_else(|| RosterError::InvalidHireDate {
        path: source.to_path_buf(),
        value: raw_hire_date.to_string(),
        row,
    })?;

    Ok(Employee::new(&record[0], &record[1], &record[2], hire_date))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<LoadedRoster> {
        parse_roster(Path::new("roster.csv"), content)
    }

    #[test]
    fn parses_rows_and_groups_by_supervisor() {
        let content = format!(
            "{}\n1,Ada,Lovelace,2008-07-22,\n2,Alan,Turing,2010-01-05,1\n3,Grace,Hopper,2011-03-24,1\n",
            ROSTER_HEADER
        );
        let loaded = parse(&content).expect("valid roster");

        assert_eq!(loaded.roster.len(), 3);
        assert_eq!(loaded.reports.len(), 2);
        let (_, reports) = loaded
            .reports
            .iter()
            .find(|(id, _)| *id == "1")
            .expect("supervisor 1");
        let ids: Vec<_> = reports.iter().map(|e| e.employee_id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);
        assert!(loaded.reports.is_supervisor(""));
        assert_eq!(
            loaded.roster.iter().last().map(|e| e.hire_date),
            NaiveDate::from_ymd_opt(2011, 3, 24)
        );
    }

    #[test]
    fn header_with_crlf_is_accepted() {
        let content = format!("{}\r\n1,Ada,Lovelace,2008-07-22,\r\n", ROSTER_HEADER);
        let loaded = parse(&content).expect("valid roster");
        assert_eq!(loaded.roster.len(), 1);
    }

    #[test]
    fn header_only_file_is_empty_roster() {
        let loaded = parse(ROSTER_HEADER).expect("header only");
        assert!(loaded.roster.is_empty());
        assert!(loaded.reports.is_empty());
    }

    #[test]
    fn wrong_header_is_rejected() {
        let err = parse("id,first,last,hired,boss\n1,A,B,2010-01-01,\n").unwrap_err();
        assert!(matches!(err, RosterError::HeaderMismatch { .. }));
        assert!(err.to_string().contains(ROSTER_HEADER));
    }

    #[test]
    fn empty_file_is_a_header_mismatch() {
        assert!(matches!(
            parse("").unwrap_err(),
            RosterError::HeaderMismatch { .. }
        ));
    }

    #[test]
    fn bad_hire_date_reports_value_and_row() {
        let content = format!(
            "{}\n1,Ada,Lovelace,2008-07-22,\n2,Alan,Turing,2010/01/05,1\n",
            ROSTER_HEADER
        );
        match parse(&content).unwrap_err() {
            RosterError::InvalidHireDate { value, row, .. } => {
                assert_eq!(value, "2010/01/05");
                assert_eq!(row, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn short_row_is_malformed() {
        let content = format!("{}\n1,Ada,Lovelace\n", ROSTER_HEADER);
        assert!(matches!(
            parse(&content).unwrap_err(),
            RosterError::MalformedRow { row: 0, fields: 3 }
        ));
    }

    #[test]
    fn extra_columns_are_ignored() {
        let content = format!("{}\n1,Ada,Lovelace,2008-07-22,,extra\n", ROSTER_HEADER);
        let loaded = parse(&content).expect("valid roster");
        assert!(loaded.roster.contains("1"));
    }

    #[test]
    fn loose_year_forms_are_rejected() {
        for value in ["11-03-24", " 2011-03-24", "+2011-03-24", "2011-03-24 ", "02011-03-24"] {
            assert_eq!(parse_date(value), None, "{value:?}");
        }
        assert_eq!(parse_date("2011-3-4"), NaiveDate::from_ymd_opt(2011, 3, 4));
    }

    #[test]
    fn loose_year_hire_date_is_a_row_error() {
        for value in ["11-03-24", " 2011-03-24", "+2011-03-24"] {
            let content = format!("{}\n1,Ada,Lovelace,\"{}\",\n", ROSTER_HEADER, value);
            match parse(&content).unwrap_err() {
                RosterError::InvalidHireDate { value: got, row, .. } => {
                    assert_eq!(got, value);
                    assert_eq!(row, 0);
                }
                other => panic!("unexpected error for {value:?}: {other:?}"),
            }
        }
    }

    #[test]
    fn loose_year_run_date_is_rejected() {
        for value in ["11-03-24", " 2011-03-24", "+2011-03-24"] {
            assert!(matches!(
                parse_run_date(value),
                Err(RosterError::InvalidRunDate { .. })
            ));
        }
    }

    #[test]
    fn run_date_parsing() {
        assert_eq!(
            parse_run_date("2016-04-25").ok(),
            NaiveDate::from_ymd_opt(2016, 4, 25)
        );
        assert!(matches!(
            parse_run_date("04/25/2016"),
            Err(RosterError::InvalidRunDate { .. })
        ));
    }
}
