//! Domain ports for the hexagonal boundary.
//!
//! Driven ports (`UserRepository`, `CostRepository`) are implemented by the
//! outbound persistence adapters. Driving ports (`CostCommand`,
//! `CostReportQuery`, `UserSummaryQuery`) are implemented by domain services
//! and consumed by the HTTP handlers.

mod macros;
pub(crate) use macros::define_port_error;

mod cost_command;
mod cost_report_query;
mod cost_repository;
mod user_repository;
mod user_summary_query;

#[cfg(test)]
pub use cost_command::MockCostCommand;
pub use cost_command::{CostCommand, CostDraft};
#[cfg(test)]
pub use cost_report_query::MockCostReportQuery;
pub use cost_report_query::{CostReportQuery, ReportRequest};
#[cfg(test)]
pub use cost_repository::MockCostRepository;
pub use cost_repository::{CostPersistenceError, CostRepository};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
#[cfg(test)]
pub use user_summary_query::MockUserSummaryQuery;
pub use user_summary_query::UserSummaryQuery;
