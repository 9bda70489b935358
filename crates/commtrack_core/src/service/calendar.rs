//! Calendar projection of communications.

use crate::model::communication::{Communication, CommunicationType};
use crate::model::company::Company;
use crate::model::ids::CompanyId;
use chrono::{DateTime, NaiveDate, Utc};

/// One calendar cell entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    /// `"<company name> - <type label>"`; the name part is empty for
    /// communications whose company no longer exists.
    pub title: String,
    pub date: DateTime<Utc>,
    pub company_id: CompanyId,
    pub kind: CommunicationType,
    pub notes: Option<String>,
}

/// One event per communication, in collection order.
pub fn calendar_events(companies: &[Company], communications: &[Communication]) -> Vec<CalendarEvent> {
    communications
        .iter()
        .map(|comm| {
            let company_name = companies
                .iter()
                .find(|company| company.id == comm.company_id)
                .map_or("", |company| company.name.as_str());
            CalendarEvent {
                title: format!("{company_name} - {}", comm.kind),
                date: comm.date,
                company_id: comm.company_id.clone(),
                kind: comm.kind,
                notes: comm.notes.clone(),
            }
        })
        .collect()
}

/// Events falling on the UTC calendar day `day`.
pub fn events_on(events: &[CalendarEvent], day: NaiveDate) -> Vec<&CalendarEvent> {
    events
        .iter()
        .filter(|event| event.date.date_naive() == day)
        .collect()
}
