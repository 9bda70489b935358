//! Distribution, rate and trend aggregations.
//!
//! The overdue trend replays the due-status calculation per company per day,
//! so it costs O(days x companies x communications). That is fine for a
//! dashboard-sized dataset.

use crate::model::communication::{Communication, CommunicationType};
use crate::model::company::Company;
use crate::model::ids::CompanyId;
use crate::report::filter::days_inclusive;
use crate::status::next_due_as_of;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeDistribution {
    pub kind: CommunicationType,
    pub count: usize,
    /// Percentage in `0.0..=100.0`.
    pub response_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanySuccessRate {
    pub company_id: CompanyId,
    pub company_name: String,
    pub rate: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverdueTrendPoint {
    pub day: NaiveDate,
    pub overdue: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyCommunications {
    pub day: NaiveDate,
    pub total: usize,
    pub responded: usize,
}

/// Share of responded communications as a percentage; `0.0` when empty.
pub fn response_rate<'a>(communications: impl IntoIterator<Item = &'a Communication>) -> f64 {
    let (total, responded) = communications
        .into_iter()
        .fold((0usize, 0usize), |(total, responded), comm| {
            (total + 1, responded + usize::from(comm.is_responded()))
        });
    if total == 0 {
        return 0.0;
    }
    responded as f64 / total as f64 * 100.0
}

/// One row per channel in enumeration order, including zero-count rows.
pub fn distribution_by_type(filtered: &[&Communication]) -> Vec<TypeDistribution> {
    CommunicationType::ALL
        .into_iter()
        .map(|kind| {
            let of_kind: Vec<&Communication> = filtered
                .iter()
                .copied()
                .filter(|comm| comm.kind == kind)
                .collect();
            TypeDistribution {
                kind,
                count: of_kind.len(),
                response_rate: response_rate(of_kind),
            }
        })
        .collect()
}

/// Per-company response rate over `filtered`, in company collection order.
pub fn company_success_rates(
    companies: &[Company],
    filtered: &[&Communication],
) -> Vec<CompanySuccessRate> {
    companies
        .iter()
        .map(|company| CompanySuccessRate {
            company_id: company.id.clone(),
            company_name: company.name.clone(),
            rate: response_rate(
                filtered
                    .iter()
                    .copied()
                    .filter(|comm| comm.company_id == company.id),
            ),
        })
        .collect()
}

/// For each day, companies whose next-due (as of that day) is before it.
///
/// Uses the full communication history, not the report filter: a company's
/// cadence depends on every contact, not only the ones in view.
pub fn overdue_trend(
    companies: &[Company],
    communications: &[Communication],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<OverdueTrendPoint> {
    days_inclusive(start, end)
        .into_iter()
        .map(|day| OverdueTrendPoint {
            day,
            overdue: companies
                .iter()
                .filter(|company| {
                    next_due_as_of(company, communications, day)
                        .is_some_and(|next_due| next_due.date_naive() < day)
                })
                .count(),
        })
        .collect()
}

/// Per-day total and responded counts over `filtered`.
pub fn communication_trend(
    filtered: &[&Communication],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<DailyCommunications> {
    days_inclusive(start, end)
        .into_iter()
        .map(|day| {
            let on_day = filtered.iter().filter(|comm| comm.date.date_naive() == day);
            let (total, responded) = on_day.fold((0, 0), |(total, responded), comm| {
                (total + 1, responded + usize::from(comm.is_responded()))
            });
            DailyCommunications {
                day,
                total,
                responded,
            }
        })
        .collect()
}
