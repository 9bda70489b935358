//! Dashboard read model.
//!
//! # Responsibility
//! - Build one row per company with its due status, recent history and the
//!   suggested next contact.
//! - Apply name search and status filtering.
//! - Count the summary cards.
//!
//! # Invariants
//! - Rows keep company collection order.
//! - Highlight overrides change only `highlight`, never `due.status` or
//!   filtering.

use crate::config::TrackerConfig;
use crate::model::communication::{Communication, CommunicationType};
use crate::model::company::Company;
use crate::model::ids::CompanyId;
use crate::status::{
    compute_due_status, latest_communication, next_due_date, CompanyDueStatus, DueStatus,
};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Status selector for the dashboard table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Overdue,
    Due,
    Upcoming,
}

impl StatusFilter {
    pub fn matches(self, status: DueStatus) -> bool {
        match self {
            Self::All => true,
            Self::Overdue => status == DueStatus::Overdue,
            Self::Due => status == DueStatus::DueToday,
            Self::Upcoming => status == DueStatus::Upcoming,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardQuery {
    /// Case-insensitive substring of the company name; empty matches all.
    pub search: String,
    pub status: StatusFilter,
    pub recent_limit: usize,
}

impl Default for DashboardQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: StatusFilter::All,
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }
}

impl DashboardQuery {
    /// Unfiltered query showing `recent_history_limit` entries per row.
    pub fn from_config(config: &TrackerConfig) -> Self {
        Self {
            recent_limit: config.recent_history_limit,
            ..Self::default()
        }
    }
}

/// Row colouring on the dashboard table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowHighlight {
    Overdue,
    DueToday,
    None,
}

/// Suggested next contact for a company.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextCommunication {
    pub date: DateTime<Utc>,
    /// Channel after the last one used, in enumeration order.
    pub kind: CommunicationType,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardRow<'a> {
    pub company: &'a Company,
    pub due: CompanyDueStatus,
    pub highlight: RowHighlight,
    /// Most recent first, at most `recent_limit` entries.
    pub recent: Vec<&'a Communication>,
    pub next: Option<NextCommunication>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardSummary {
    pub overdue: usize,
    pub due_today: usize,
    pub total_companies: usize,
}

/// Companies whose row highlight the user switched off.
#[derive(Debug, Clone, Default)]
pub struct HighlightOverrides {
    disabled: HashSet<CompanyId>,
}

impl HighlightOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the override; returns `true` when highlighting is now disabled.
    pub fn toggle(&mut self, company_id: &CompanyId) -> bool {
        if self.disabled.remove(company_id) {
            false
        } else {
            self.disabled.insert(company_id.clone());
            true
        }
    }

    pub fn is_disabled(&self, company_id: &CompanyId) -> bool {
        self.disabled.contains(company_id)
    }
}

/// Recent communications for one company, newest first.
pub fn recent_communications<'a>(
    company_id: &CompanyId,
    communications: &'a [Communication],
    limit: usize,
) -> Vec<&'a Communication> {
    let mut recent: Vec<&Communication> = communications
        .iter()
        .filter(|comm| &comm.company_id == company_id)
        .collect();
    // Reverse first so equal dates list the later insertion first.
    recent.reverse();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(limit);
    recent
}

/// Next contact date plus the channel following the last one used.
pub fn next_suggested_communication(
    company: &Company,
    communications: &[Communication],
) -> Option<NextCommunication> {
    let last = latest_communication(company, communications)?;
    Some(NextCommunication {
        date: next_due_date(last.date, company.communication_periodicity)?,
        kind: last.kind.next(),
    })
}

pub fn dashboard_rows<'a>(
    companies: &'a [Company],
    communications: &'a [Communication],
    query: &DashboardQuery,
    overrides: &HighlightOverrides,
    now: DateTime<Utc>,
) -> Vec<DashboardRow<'a>> {
    let needle = query.search.trim().to_lowercase();

    companies
        .iter()
        .filter(|company| needle.is_empty() || company.name.to_lowercase().contains(&needle))
        .filter_map(|company| {
            let due = compute_due_status(company, communications, now);
            if !query.status.matches(due.status) {
                return None;
            }
            let highlight = if overrides.is_disabled(&company.id) {
                RowHighlight::None
            } else {
                match due.status {
                    DueStatus::Overdue => RowHighlight::Overdue,
                    DueStatus::DueToday => RowHighlight::DueToday,
                    DueStatus::Upcoming | DueStatus::NoHistory => RowHighlight::None,
                }
            };
            let next = next_suggested_communication(company, communications);
            Some(DashboardRow {
                company,
                recent: recent_communications(&company.id, communications, query.recent_limit),
                due,
                highlight,
                next,
            })
        })
        .collect()
}

/// Summary card counts; each company counts at most once.
pub fn dashboard_summary(
    companies: &[Company],
    communications: &[Communication],
    now: DateTime<Utc>,
) -> DashboardSummary {
    let mut summary = DashboardSummary {
        total_companies: companies.len(),
        ..DashboardSummary::default()
    };
    for company in companies {
        match compute_due_status(company, communications, now).status {
            DueStatus::Overdue => summary.overdue += 1,
            DueStatus::DueToday => summary.due_today += 1,
            DueStatus::Upcoming | DueStatus::NoHistory => {}
        }
    }
    summary
}
