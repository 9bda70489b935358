//! Company + communication store.
//!
//! # Responsibility
//! - Own the two collections persisted under the tracker storage key.
//! - Provide add / replace-by-id / delete-by-id semantics.
//!
//! # Invariants
//! - Collection order is insertion order; aggregations rely on it.
//! - `add_communication` does not check that the company exists.

use crate::model::communication::{Communication, CommunicationDraft};
use crate::model::company::Company;
use crate::model::ids::{CommunicationId, CompanyId};
use log::debug;
use serde::{Deserialize, Serialize};

/// Serializable view of both tracker collections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerSnapshot {
    #[serde(default)]
    pub companies: Vec<Company>,
    #[serde(default)]
    pub communications: Vec<Communication>,
}

/// Explicit store object for companies and their communications.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    companies: Vec<Company>,
    communications: Vec<Communication>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a store from a persisted snapshot.
    pub fn from_snapshot(snapshot: TrackerSnapshot) -> Self {
        Self {
            companies: snapshot.companies,
            communications: snapshot.communications,
        }
    }

    pub fn snapshot(&self) -> TrackerSnapshot {
        TrackerSnapshot {
            companies: self.companies.clone(),
            communications: self.communications.clone(),
        }
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn communications(&self) -> &[Communication] {
        &self.communications
    }

    pub fn company(&self, id: &CompanyId) -> Option<&Company> {
        self.companies.iter().find(|company| &company.id == id)
    }

    /// Communications for one company, in insertion order.
    pub fn communications_for<'a>(
        &'a self,
        company_id: &'a CompanyId,
    ) -> impl Iterator<Item = &'a Communication> + 'a {
        self.communications
            .iter()
            .filter(move |comm| &comm.company_id == company_id)
    }

    pub fn add_company(&mut self, company: Company) {
        debug!("event=company_add module=store id={}", company.id);
        self.companies.push(company);
    }

    /// Replaces the company with the same id.
    ///
    /// Returns `false` (and changes nothing) when no company has that id.
    pub fn update_company(&mut self, company: Company) -> bool {
        match self.companies.iter_mut().find(|c| c.id == company.id) {
            Some(slot) => {
                debug!("event=company_update module=store id={}", company.id);
                *slot = company;
                true
            }
            None => {
                debug!(
                    "event=company_update module=store status=skipped reason=not_found id={}",
                    company.id
                );
                false
            }
        }
    }

    /// Removes the company and every communication referencing it.
    ///
    /// Returns the number of cascaded communications.
    pub fn delete_company(&mut self, id: &CompanyId) -> usize {
        self.companies.retain(|company| &company.id != id);
        let before = self.communications.len();
        self.communications.retain(|comm| &comm.company_id != id);
        let cascaded = before - self.communications.len();
        debug!("event=company_delete module=store id={id} cascaded={cascaded}");
        cascaded
    }

    pub fn add_communication(&mut self, communication: Communication) {
        debug!(
            "event=communication_add module=store id={} company_id={}",
            communication.id, communication.company_id
        );
        self.communications.push(communication);
    }

    /// Logs the same communication against each selected company.
    ///
    /// Every company receives its own record with a fresh id.
    pub fn log_communication(
        &mut self,
        company_ids: &[CompanyId],
        draft: &CommunicationDraft,
    ) -> Vec<CommunicationId> {
        company_ids
            .iter()
            .map(|company_id| {
                let communication = draft.for_company(company_id);
                let id = communication.id.clone();
                self.add_communication(communication);
                id
            })
            .collect()
    }

    /// Moves a preferred method within one company's ordered list.
    ///
    /// Unknown company or out-of-range indices leave the store unchanged.
    pub fn reorder_preferred_method(&mut self, company_id: &CompanyId, from: usize, to: usize) -> bool {
        self.company_mut(company_id)
            .is_some_and(|company| company.reorder_preferred_method(from, to))
    }

    /// Toggles a method name in one company's mandatory set.
    ///
    /// Returns the new membership, or `None` for an unknown company.
    pub fn toggle_mandatory_method(&mut self, company_id: &CompanyId, name: &str) -> Option<bool> {
        self.company_mut(company_id)
            .map(|company| company.toggle_mandatory_method(name))
    }

    /// Seeds an empty preferred-method list with `defaults`.
    ///
    /// Companies that already have preferred methods are left as-is.
    pub fn initialize_preferred_methods(&mut self, company_id: &CompanyId, defaults: Vec<String>) -> bool {
        match self.company_mut(company_id) {
            Some(company) if company.preferred_methods.is_empty() => {
                company.preferred_methods = defaults;
                true
            }
            _ => false,
        }
    }

    fn company_mut(&mut self, id: &CompanyId) -> Option<&mut Company> {
        self.companies.iter_mut().find(|company| &company.id == id)
    }
}
