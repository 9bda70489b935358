//! Communication domain model.
//!
//! # Responsibility
//! - Define one logged contact with a company.
//! - Own the fixed channel enumeration and the "responded" heuristic.
//!
//! # Invariants
//! - `company_id` is not validated on insert; dangling ids simply match
//!   nothing in aggregations.
//! - `date` is caller-supplied and may lie in the future.

use crate::model::ids::{CommunicationId, CompanyId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

const RESPONDED_MARKER: &str = "responded";

/// Fixed enumeration of communication channels.
///
/// Serialized with the display labels used in persisted snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommunicationType {
    #[serde(rename = "LinkedIn Post")]
    LinkedInPost,
    #[serde(rename = "LinkedIn Message")]
    LinkedInMessage,
    #[serde(rename = "Email")]
    Email,
    #[serde(rename = "Phone Call")]
    PhoneCall,
    #[serde(rename = "Other")]
    Other,
}

impl CommunicationType {
    /// Every channel in enumeration order.
    pub const ALL: [CommunicationType; 5] = [
        CommunicationType::LinkedInPost,
        CommunicationType::LinkedInMessage,
        CommunicationType::Email,
        CommunicationType::PhoneCall,
        CommunicationType::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::LinkedInPost => "LinkedIn Post",
            Self::LinkedInMessage => "LinkedIn Message",
            Self::Email => "Email",
            Self::PhoneCall => "Phone Call",
            Self::Other => "Other",
        }
    }

    /// Parses a wire label (exact match).
    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.label() == value)
    }

    /// Next channel in enumeration order, wrapping after the last one.
    pub fn next(self) -> Self {
        let index = Self::ALL
            .iter()
            .position(|kind| *kind == self)
            .unwrap_or_default();
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl Display for CommunicationType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Optional contact snapshot captured with a communication.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_profile: Option<String>,
}

/// One logged contact with a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Communication {
    pub id: CommunicationId,
    pub company_id: CompanyId,
    /// Serialized as `type` to match the persisted schema.
    #[serde(rename = "type")]
    pub kind: CommunicationType,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_details: Option<ContactDetails>,
}

impl Communication {
    /// Creates a communication with a generated id and no notes.
    pub fn new(
        company_id: impl Into<CompanyId>,
        kind: CommunicationType,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: CommunicationId::generate(),
            company_id: company_id.into(),
            kind,
            date,
            notes: None,
            contact_details: None,
        }
    }

    /// Builder-style notes setter.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Response heuristic: notes contain "responded", case-insensitively.
    ///
    /// This is a free-text stand-in for a structured response field.
    pub fn is_responded(&self) -> bool {
        self.notes
            .as_deref()
            .is_some_and(|notes| notes.to_lowercase().contains(RESPONDED_MARKER))
    }
}

/// Input for logging one communication against several companies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommunicationDraft {
    pub kind: CommunicationType,
    pub date: DateTime<Utc>,
    pub notes: Option<String>,
    pub contact_details: Option<ContactDetails>,
}

impl CommunicationDraft {
    /// Materializes the draft for one company with a fresh id.
    pub fn for_company(&self, company_id: &CompanyId) -> Communication {
        Communication {
            id: CommunicationId::generate(),
            company_id: company_id.clone(),
            kind: self.kind,
            date: self.date,
            notes: self.notes.clone(),
            contact_details: self.contact_details.clone(),
        }
    }
}
