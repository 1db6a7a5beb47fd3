//! Direct report milestones CLI
//!
//! The `milestones` command reads an employee roster and prints, for every
//! supervisor, the next five 5-year work anniversaries across their direct
//! reports. Employees without reports are listed with `No direct reports`.
//!
//! ```text
//! milestones --input employees.csv --run-date 2016-04-25
//! milestones -i employees.csv -r 2016-04-25 --format json -o report.json
//! ```

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use milestones_core::{
    build_report, init_tracing, load_roster, parse_run_date, render_report, write_report,
    MilestoneReport, ReportFormat, ReportSpan, RosterError, METRICS,
};
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(name = "milestones")]
#[command(author = "Stevedores Org")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Upcoming 5-year work anniversaries for each supervisor's direct reports",
    long_about = None
)]
struct Cli {
    /// Roster CSV (employee_id,first_name,last_name,hire_date,supervisor_id)
    #[arg(short, long, env = "MILESTONES_INPUT")]
    input: PathBuf,

    /// Reference date (YYYY-MM-DD); earlier anniversaries are not reported
    #[arg(short, long, visible_alias = "run_date", env = "MILESTONES_RUN_DATE")]
    run_date: String,

    /// Report format: text or json
    #[arg(short, long, env = "MILESTONES_FORMAT", default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    init_tracing(cli.json, level);

    run(&cli)?;
    METRICS.flush();
    Ok(())
}

/// Validate inputs, load the roster, and build the report.
///
/// Fails before any computation when the input file is missing or the run
/// date is malformed, and on the first invalid roster row.
fn generate(cli: &Cli) -> Result<MilestoneReport> {
    if !cli.input.is_file() {
        return Err(RosterError::InputNotFound {
            path: cli.input.clone(),
        }
        .into());
    }
    let run_date = parse_run_date(&cli.run_date)?;

    let _span = ReportSpan::enter(&cli.input, run_date);
    let loaded = load_roster(&cli.input)?;
    let report = build_report(&loaded, run_date);
    info!(
        summaries = report.summaries.len(),
        placeholders = report.placeholders.len(),
        "report ready"
    );
    Ok(report)
}

fn run(cli: &Cli) -> Result<()> {
    let report = generate(cli)?;

    match &cli.output {
        Some(path) => {
            write_report(path, &report, cli.format)?;
            info!("Wrote report to {:?}", path);
        }
        None => {
            let rendered = render_report(&report, cli.format)?;
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .context("Failed to write report to stdout")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use milestones_core::ROSTER_HEADER;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("milestones").chain(args.iter().copied()))
            .expect("parse args")
    }

    fn roster_file(dir: &tempfile::TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("employees.csv");
        std::fs::write(&path, format!("{}\n{}", ROSTER_HEADER, body)).expect("write roster");
        path
    }

    #[test]
    fn parses_short_and_long_flags() {
        let cli = parse(&["-i", "employees.csv", "-r", "2016-04-25"]);
        assert_eq!(cli.input, PathBuf::from("employees.csv"));
        assert_eq!(cli.run_date, "2016-04-25");
        assert_eq!(cli.format, ReportFormat::Text);
        assert!(cli.output.is_none());

        let cli = parse(&[
            "--input",
            "employees.csv",
            "--run_date",
            "2016-04-25",
            "--format",
            "json",
        ]);
        assert_eq!(cli.format, ReportFormat::Json);
    }

    #[test]
    fn input_and_run_date_are_required() {
        assert!(Cli::try_parse_from(["milestones", "-i", "employees.csv"]).is_err());
        assert!(Cli::try_parse_from(["milestones", "-r", "2016-04-25"]).is_err());
    }

    #[test]
    fn unknown_format_is_rejected() {
        let result =
            Cli::try_parse_from(["milestones", "-i", "a.csv", "-r", "2016-04-25", "-f", "xml"]);
        assert!(result.is_err());
    }

    #[test]
    fn missing_input_fails_before_run_date_check() {
        let cli = parse(&["-i", "/definitely/not/here.csv", "-r", "not-a-date"]);
        let err = generate(&cli).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RosterError>(),
            Some(RosterError::InputNotFound { .. })
        ));
    }

    #[test]
    fn bad_run_date_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = roster_file(&dir, "1,Ada,Lovelace,2008-07-22,\n");
        let cli = parse(&["-i", path.to_str().expect("utf-8 path"), "-r", "25/04/2016"]);

        let err = generate(&cli).unwrap_err();
        assert!(err.to_string().contains("'25/04/2016'"));
    }

    #[test]
    fn generates_summaries_and_placeholders() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = roster_file(
            &dir,
            "1,Ada,Lovelace,2008-07-22,\n2,Alan,Turing,2010-01-05,1\n3,Grace,Hopper,2011-03-24,1\n",
        );
        let cli = parse(&["-i", path.to_str().expect("utf-8 path"), "-r", "2016-04-25"]);

        let report = generate(&cli).expect("generate report");
        let subjects: Vec<_> = report
            .summaries
            .iter()
            .map(|s| s.supervisor_id.as_str())
            .collect();
        assert_eq!(subjects, vec!["", "1"]);
        assert_eq!(report.placeholders.len(), 2);
    }

    #[test]
    fn writes_json_report_to_output_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = roster_file(&dir, "1,Ada,Lovelace,2008-07-22,\n2,Alan,Turing,2010-01-05,1\n");
        let out = dir.path().join("report.json");
        let cli = parse(&[
            "-i",
            path.to_str().expect("utf-8 path"),
            "-r",
            "2016-04-25",
            "-f",
            "json",
            "-o",
            out.to_str().expect("utf-8 path"),
        ]);

        run(&cli).expect("run");
        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&out).expect("read report"))
                .expect("parse report");
        assert_eq!(raw[0]["supervisor_id"], "");
        assert_eq!(
            raw[0]["upcoming_milestones"][0]["anniversary_date"],
            "2018-07-22 00:00:00"
        );
        assert_eq!(raw[2]["upcoming_milestones"], "No direct reports");
    }
}
