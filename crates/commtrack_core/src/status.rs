//! Due-status calculation.
//!
//! # Responsibility
//! - Derive, per company, the latest communication, the next expected
//!   contact date and a status classification.
//!
//! # Invariants
//! - `next_due == last.date + periodicity days`, exactly.
//! - A next-due date past the calendar range is `None` and classifies as
//!   `Upcoming`; no input makes the calculator panic.
//! - Classification compares UTC calendar days, never raw timestamps.
//! - Equal dates resolve to the communication latest in collection order.
//! - Pure: nothing is cached, every call recomputes from its inputs.

use crate::model::communication::Communication;
use crate::model::company::Company;
use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::Serialize;

/// Contact status of one company relative to "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DueStatus {
    /// Next-due day is strictly before today.
    Overdue,
    /// Next-due day is today.
    DueToday,
    /// Next-due day is after today.
    Upcoming,
    /// No communication recorded; never overdue or due.
    NoHistory,
}

/// Calculator output for one company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyDueStatus {
    pub status: DueStatus,
    pub last_communication_date: Option<DateTime<Utc>>,
    pub next_due_date: Option<DateTime<Utc>>,
}

impl CompanyDueStatus {
    fn no_history() -> Self {
        Self {
            status: DueStatus::NoHistory,
            last_communication_date: None,
            next_due_date: None,
        }
    }
}

/// Most recent communication for `company`, if any.
///
/// Ties on `date` go to the later entry in `communications`.
pub fn latest_communication<'a>(
    company: &Company,
    communications: &'a [Communication],
) -> Option<&'a Communication> {
    latest_matching(company, communications, |_| true)
}

/// Next expected contact: `date + periodicity` whole days.
///
/// Returns `None` when the result falls outside the representable range.
pub fn next_due_date(last: DateTime<Utc>, periodicity_days: u32) -> Option<DateTime<Utc>> {
    last.checked_add_days(Days::new(u64::from(periodicity_days)))
}

/// Classifies a next-due instant against the calendar day `today`.
pub fn classify(next_due: DateTime<Utc>, today: NaiveDate) -> DueStatus {
    let due_day = next_due.date_naive();
    if due_day < today {
        DueStatus::Overdue
    } else if due_day == today {
        DueStatus::DueToday
    } else {
        DueStatus::Upcoming
    }
}

/// Computes the due status of one company as of `now`.
pub fn compute_due_status(
    company: &Company,
    communications: &[Communication],
    now: DateTime<Utc>,
) -> CompanyDueStatus {
    let Some(last) = latest_communication(company, communications) else {
        return CompanyDueStatus::no_history();
    };

    let next_due = next_due_date(last.date, company.communication_periodicity);
    CompanyDueStatus {
        status: next_due.map_or(DueStatus::Upcoming, |due| classify(due, now.date_naive())),
        last_communication_date: Some(last.date),
        next_due_date: next_due,
    }
}

/// Next-due date using only communications dated on or before `day`.
///
/// Used by trend reports, which replay history one calendar day at a time.
pub fn next_due_as_of(
    company: &Company,
    communications: &[Communication],
    day: NaiveDate,
) -> Option<DateTime<Utc>> {
    latest_matching(company, communications, |comm| comm.date.date_naive() <= day)
        .and_then(|last| next_due_date(last.date, company.communication_periodicity))
}

fn latest_matching<'a>(
    company: &Company,
    communications: &'a [Communication],
    include: impl Fn(&Communication) -> bool,
) -> Option<&'a Communication> {
    communications
        .iter()
        .filter(|comm| comm.company_id == company.id && include(*comm))
        // max_by_key keeps the last maximum, i.e. highest insertion order.
        .max_by_key(|comm| comm.date)
}
