//! Notification aggregation for the overdue/due-today indicator.
//!
//! # Responsibility
//! - Bucket companies into overdue and due-today lists for display.
//! - Provide the badge count.
//!
//! # Invariants
//! - Bucket order follows company collection order; nothing is re-sorted.
//! - Companies without any communication appear in neither bucket.

use crate::model::communication::Communication;
use crate::model::company::Company;
use crate::model::ids::CompanyId;
use crate::status::{compute_due_status, DueStatus};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One company entry in a notification bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationEntry {
    pub company_id: CompanyId,
    pub company_name: String,
    pub due_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NotificationSummary {
    pub overdue: Vec<NotificationEntry>,
    pub due_today: Vec<NotificationEntry>,
}

impl NotificationSummary {
    /// Badge value: overdue plus due-today.
    pub fn total_count(&self) -> usize {
        self.overdue.len() + self.due_today.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_count() == 0
    }
}

/// Runs the due-status calculator for every company and buckets the result.
pub fn aggregate_notifications(
    companies: &[Company],
    communications: &[Communication],
    now: DateTime<Utc>,
) -> NotificationSummary {
    let mut summary = NotificationSummary::default();

    for company in companies {
        let due = compute_due_status(company, communications, now);
        let Some(due_date) = due.next_due_date else {
            continue;
        };
        let entry = NotificationEntry {
            company_id: company.id.clone(),
            company_name: company.name.clone(),
            due_date,
        };
        match due.status {
            DueStatus::Overdue => summary.overdue.push(entry),
            DueStatus::DueToday => summary.due_today.push(entry),
            DueStatus::Upcoming | DueStatus::NoHistory => {}
        }
    }

    summary
}
