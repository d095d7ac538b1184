//! Driving port for monthly cost reports.

use async_trait::async_trait;

use crate::domain::{CostReport, Error};

/// Raw report parameters as received from a client.
///
/// All three are kept as text so the report service can apply the
/// required-field and integer-prefix rules itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportRequest {
    /// User identity key.
    pub id: Option<String>,
    /// Calendar year.
    pub year: Option<String>,
    /// Calendar month, 1-based.
    pub month: Option<String>,
}

/// Domain use-case port for generating a monthly report.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CostReportQuery: Send + Sync {
    /// Build the report for one user and calendar month.
    async fn generate_report(&self, request: ReportRequest) -> Result<CostReport, Error>;
}
