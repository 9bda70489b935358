//! Reporting aggregation over the communication history.
//!
//! # Responsibility
//! - Filter communications by date range, company and channel.
//! - Compute distribution, response/success rates and day-bucketed trends.
//! - Export filtered communications as CSV.
//!
//! # Invariants
//! - All functions are pure and deterministic given their inputs.
//! - Rates over an empty set are exactly `0.0`, never NaN.
//! - Date ranges are inclusive UTC calendar days.

pub mod aggregate;
pub mod export;
pub mod filter;

pub use aggregate::{
    communication_trend, company_success_rates, distribution_by_type, overdue_trend,
    response_rate, CompanySuccessRate, DailyCommunications, OverdueTrendPoint, TypeDistribution,
};
pub use export::{export_csv, CSV_HEADER};
pub use filter::{days_inclusive, filter_communications, ReportFilter};
