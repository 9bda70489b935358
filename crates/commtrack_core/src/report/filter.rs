//! Report filter and calendar-day range helpers.

use crate::model::communication::{Communication, CommunicationType};
use crate::model::ids::CompanyId;
use chrono::{Days, NaiveDate};

/// Date-range plus optional company/channel filter for reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFilter {
    /// First included calendar day.
    pub start: NaiveDate,
    /// Last included calendar day.
    pub end: NaiveDate,
    pub company_id: Option<CompanyId>,
    pub kind: Option<CommunicationType>,
}

impl ReportFilter {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            company_id: None,
            kind: None,
        }
    }

    /// Window from `days` before `today` through `today`.
    ///
    /// Windows reaching past the calendar range start at `NaiveDate::MIN`.
    pub fn last_days(today: NaiveDate, days: u32) -> Self {
        let start = today
            .checked_sub_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MIN);
        Self::new(start, today)
    }

    pub fn with_company(mut self, company_id: impl Into<CompanyId>) -> Self {
        self.company_id = Some(company_id.into());
        self
    }

    pub fn with_kind(mut self, kind: CommunicationType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn matches(&self, communication: &Communication) -> bool {
        let day = communication.date.date_naive();
        if day < self.start || day > self.end {
            return false;
        }
        if let Some(company_id) = &self.company_id {
            if &communication.company_id != company_id {
                return false;
            }
        }
        self.kind.map_or(true, |kind| communication.kind == kind)
    }

    pub fn days(&self) -> Vec<NaiveDate> {
        days_inclusive(self.start, self.end)
    }
}

/// Communications matching `filter`, in collection order.
pub fn filter_communications<'a>(
    communications: &'a [Communication],
    filter: &ReportFilter,
) -> Vec<&'a Communication> {
    communications
        .iter()
        .filter(|comm| filter.matches(comm))
        .collect()
}

/// Every calendar day from `start` through `end`; empty when reversed.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|day| *day <= end).collect()
}

#[cfg(test)]
mod tests {
    use super::{days_inclusive, ReportFilter};
    use chrono::NaiveDate;

    #[test]
    fn oversized_window_clamps_to_calendar_start() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let filter = ReportFilter::last_days(today, u32::MAX);
        assert_eq!(filter.start, NaiveDate::MIN);
        assert_eq!(filter.end, today);
    }

    #[test]
    fn day_range_is_inclusive_and_empty_when_reversed() {
        let start = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        assert_eq!(days_inclusive(start, end).len(), 3);
        assert!(days_inclusive(end, start).is_empty());
    }
}
