//! Tracker use-case service.
//!
//! # Responsibility
//! - Own the entity store and method catalog for one application run.
//! - Forward every mutation, then hand the new snapshot to the repository.
//! - Expose status, notification, dashboard, report and calendar queries.
//!
//! # Invariants
//! - Mutations are total: persistence failures are logged, never returned.
//! - Queries read the in-memory state, so writes are visible immediately.

use crate::model::communication::{Communication, CommunicationDraft};
use crate::model::company::Company;
use crate::model::ids::{CommunicationId, CompanyId, MethodId};
use crate::model::method::CommunicationMethod;
use crate::notify::{aggregate_notifications, NotificationSummary};
use crate::report::{self, ReportFilter};
use crate::repo::state_repo::{RepoResult, StateRepository};
use crate::service::calendar::{calendar_events, CalendarEvent};
use crate::service::dashboard::{
    dashboard_rows, dashboard_summary, DashboardQuery, DashboardRow, DashboardSummary,
    HighlightOverrides,
};
use crate::status::{compute_due_status, CompanyDueStatus};
use crate::store::entity_store::EntityStore;
use crate::store::method_catalog::MethodCatalog;
use chrono::{DateTime, Utc};
use log::{info, warn};

/// Report bundle for one filter.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSummary {
    pub filtered_count: usize,
    pub distribution: Vec<report::TypeDistribution>,
    pub overdue_trend: Vec<report::OverdueTrendPoint>,
    pub success_rates: Vec<report::CompanySuccessRate>,
    pub communication_trend: Vec<report::DailyCommunications>,
}

pub struct TrackerService<R: StateRepository> {
    repo: R,
    store: EntityStore,
    catalog: MethodCatalog,
}

impl<R: StateRepository> TrackerService<R> {
    /// Loads both persisted records; absent keys start empty.
    ///
    /// # Errors
    /// - Repository read errors and unreadable persisted values.
    pub fn open(repo: R) -> RepoResult<Self> {
        let store = EntityStore::from_snapshot(repo.load_tracker_state()?);
        let catalog = MethodCatalog::from_snapshot(repo.load_methods()?);
        info!(
            "event=tracker_open module=service status=ok companies={} communications={} methods={}",
            store.companies().len(),
            store.communications().len(),
            catalog.methods().len()
        );
        Ok(Self {
            repo,
            store,
            catalog,
        })
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn catalog(&self) -> &MethodCatalog {
        &self.catalog
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn add_company(&mut self, company: Company) {
        self.store.add_company(company);
        self.persist_state();
    }

    pub fn update_company(&mut self, company: Company) -> bool {
        let replaced = self.store.update_company(company);
        if replaced {
            self.persist_state();
        }
        replaced
    }

    pub fn delete_company(&mut self, id: &CompanyId) -> usize {
        let cascaded = self.store.delete_company(id);
        self.persist_state();
        cascaded
    }

    pub fn add_communication(&mut self, communication: Communication) {
        self.store.add_communication(communication);
        self.persist_state();
    }

    pub fn log_communication(
        &mut self,
        company_ids: &[CompanyId],
        draft: &CommunicationDraft,
    ) -> Vec<CommunicationId> {
        let ids = self.store.log_communication(company_ids, draft);
        self.persist_state();
        ids
    }

    pub fn reorder_preferred_method(&mut self, company_id: &CompanyId, from: usize, to: usize) -> bool {
        let moved = self.store.reorder_preferred_method(company_id, from, to);
        if moved {
            self.persist_state();
        }
        moved
    }

    pub fn toggle_mandatory_method(&mut self, company_id: &CompanyId, name: &str) -> Option<bool> {
        let toggled = self.store.toggle_mandatory_method(company_id, name);
        if toggled.is_some() {
            self.persist_state();
        }
        toggled
    }

    /// Seeds an empty preferred list from the catalog's sequence order.
    pub fn initialize_preferred_methods(&mut self, company_id: &CompanyId) -> bool {
        let defaults = self.catalog.default_preferred_sequence();
        let seeded = self.store.initialize_preferred_methods(company_id, defaults);
        if seeded {
            self.persist_state();
        }
        seeded
    }

    pub fn add_method(&mut self, method: CommunicationMethod) {
        self.catalog.add_method(method);
        self.persist_methods();
    }

    pub fn update_method(&mut self, method: CommunicationMethod) -> bool {
        let replaced = self.catalog.update_method(method);
        if replaced {
            self.persist_methods();
        }
        replaced
    }

    pub fn toggle_method(&mut self, id: &MethodId) -> Option<bool> {
        let active = self.catalog.toggle_method(id);
        if active.is_some() {
            self.persist_methods();
        }
        active
    }

    pub fn delete_method(&mut self, id: &MethodId) -> bool {
        let deleted = self.catalog.delete_method(id);
        if deleted {
            self.persist_methods();
        }
        deleted
    }

    /// Due status for one company, or `None` for an unknown id.
    pub fn due_status(&self, company_id: &CompanyId, now: DateTime<Utc>) -> Option<CompanyDueStatus> {
        let company = self.store.company(company_id)?;
        Some(compute_due_status(company, self.store.communications(), now))
    }

    pub fn notifications(&self, now: DateTime<Utc>) -> NotificationSummary {
        aggregate_notifications(self.store.companies(), self.store.communications(), now)
    }

    pub fn dashboard(
        &self,
        query: &DashboardQuery,
        overrides: &HighlightOverrides,
        now: DateTime<Utc>,
    ) -> Vec<DashboardRow<'_>> {
        dashboard_rows(
            self.store.companies(),
            self.store.communications(),
            query,
            overrides,
            now,
        )
    }

    pub fn dashboard_summary(&self, now: DateTime<Utc>) -> DashboardSummary {
        dashboard_summary(self.store.companies(), self.store.communications(), now)
    }

    pub fn report(&self, filter: &ReportFilter) -> ReportSummary {
        let companies = self.store.companies();
        let communications = self.store.communications();
        let filtered = report::filter_communications(communications, filter);
        ReportSummary {
            filtered_count: filtered.len(),
            distribution: report::distribution_by_type(&filtered),
            overdue_trend: report::overdue_trend(companies, communications, filter.start, filter.end),
            success_rates: report::company_success_rates(companies, &filtered),
            communication_trend: report::communication_trend(&filtered, filter.start, filter.end),
        }
    }

    pub fn export_csv(&self, filter: &ReportFilter) -> String {
        let filtered = report::filter_communications(self.store.communications(), filter);
        report::export_csv(&filtered, self.store.companies())
    }

    pub fn calendar(&self) -> Vec<CalendarEvent> {
        calendar_events(self.store.companies(), self.store.communications())
    }

    fn persist_state(&self) {
        if let Err(err) = self.repo.save_tracker_state(&self.store.snapshot()) {
            warn!("event=state_persist module=service status=error key=tracker error={err}");
        }
    }

    fn persist_methods(&self) {
        if let Err(err) = self.repo.save_methods(&self.catalog.snapshot()) {
            warn!("event=state_persist module=service status=error key=methods error={err}");
        }
    }
}
