//! Work anniversary date generation.
//!
//! Milestones fall every [`MILESTONE_INTERVAL_YEARS`] years after the hire
//! date. Year addition follows calendar semantics: a February 29 hire date
//! lands on February 28 in non-leap years.

use chrono::{Datelike, Months, NaiveDate};

/// Years between two consecutive milestones.
pub const MILESTONE_INTERVAL_YEARS: u32 = 5;

/// Number of upcoming milestones computed per employee, and the cap applied
/// to each supervisor summary.
pub const MILESTONES_PER_EMPLOYEE: usize = 5;

/// The `k`-th milestone after `hire_date` (`hire_date + 5k` years).
///
/// Returns `None` when the result is not representable.
pub fn nth_anniversary(hire_date: NaiveDate, k: u32) -> Option<NaiveDate> {
    let months = k.checked_mul(MILESTONE_INTERVAL_YEARS)?.checked_mul(12)?;
    hire_date.checked_add_months(Months::new(months))
}

/// The next [`MILESTONES_PER_EMPLOYEE`] milestones on or after `reference_date`.
///
/// Candidates are `hire_date + 5k` years for `k = 1, 2, ...`; anything
/// strictly before `reference_date` is skipped, so a milestone falling on the
/// reference date itself is kept. The result is strictly increasing.
pub fn upcoming_anniversaries(hire_date: NaiveDate, reference_date: NaiveDate) -> Vec<NaiveDate> {
    // Every k below gap / 5 lands in a year before the reference year.
    let gap = reference_date.year() - hire_date.year();
    let mut k = u32::try_from(gap / MILESTONE_INTERVAL_YEARS as i32)
        .unwrap_or(0)
        .max(1);

    let mut dates = Vec::with_capacity(MILESTONES_PER_EMPLOYEE);
    while dates.len() < MILESTONES_PER_EMPLOYEE {
        let Some(candidate) = nth_anniversary(hire_date, k) else {
            tracing::debug!(%hire_date, k, "anniversary out of calendar range");
            break;
        };
        k += 1;
        if candidate < reference_date {
            continue;
        }
        dates.push(candidate);
    }
    dates
}
