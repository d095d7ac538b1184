//! Domain primitives, services, and ports.
//!
//! Purpose: define the strongly typed entities for users and their costs,
//! the monthly report engine, and the driving/driven ports that keep the
//! domain independent of HTTP and storage concerns.
//!
//! Public surface:
//! - Error / ErrorCode: transport agnostic failure payload.
//! - User / UserId: identity of a spender.
//! - Category / Cost / NewCost: individual expense entries.
//! - CostReport and the report engine in [`report`].
//! - Services implementing the driving ports: [`CostCommandService`],
//!   [`CostReportService`], [`UserSummaryService`].

pub mod category;
pub mod cost;
pub mod cost_service;
pub mod error;
pub mod gate;
pub mod ports;
pub mod report;
pub mod trace_id;
pub mod user;
pub mod user_summary;

pub use self::category::{Category, CategoryParseError, REPORT_CATEGORIES};
pub use self::cost::{CategoryGroup, Cost, CostId, NewCost, ReportItem};
pub use self::cost_service::CostCommandService;
pub use self::error::{Error, ErrorCode};
pub use self::gate::{Presence, UserExistenceGate, require_field, require_user_id};
pub use self::report::{
    CategoryEntry, CostReport, CostReportService, MonthWindow, NumericEcho, build_report_costs,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserId, UserValidationError};
pub use self::user_summary::{UserSummary, UserSummaryService, total_spend};

/// Convenient result alias for domain services.
///
/// # Examples
/// ```
/// use expense_tracker::domain::{DomainResult, Error};
///
/// fn lookup() -> DomainResult<u32> {
///     Err(Error::user_not_found("42"))
/// }
///
/// assert!(lookup().is_err());
/// ```
pub type DomainResult<T> = Result<T, Error>;
