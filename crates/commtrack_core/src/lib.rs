//! Core domain logic for commtrack.
//! This crate owns the contact-cadence rules; front ends only render them.

pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod model;
pub mod notify;
pub mod repo;
pub mod report;
pub mod service;
pub mod status;
pub mod store;

pub use config::{ConfigError, TrackerConfig};
pub use error::{CoreError, CoreResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::communication::{
    Communication, CommunicationDraft, CommunicationType, ContactDetails,
};
pub use model::company::Company;
pub use model::ids::{CommunicationId, CompanyId, MethodId};
pub use model::method::CommunicationMethod;
pub use notify::{aggregate_notifications, NotificationEntry, NotificationSummary};
pub use repo::state_repo::{
    MemoryStateRepository, RepoError, RepoResult, SqliteStateRepository, StateRepository,
    StorageKeys,
};
pub use report::ReportFilter;
pub use service::dashboard::{
    DashboardQuery, DashboardRow, DashboardSummary, HighlightOverrides, StatusFilter,
};
pub use service::tracker_service::{ReportSummary, TrackerService};
pub use status::{compute_due_status, CompanyDueStatus, DueStatus};
pub use store::entity_store::{EntityStore, TrackerSnapshot};
pub use store::method_catalog::{MethodCatalog, MethodsSnapshot};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
