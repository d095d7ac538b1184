//! Driving port for recording costs.
//!
//! Inbound adapters hand over the raw, still-unvalidated fields of a cost
//! entry. The implementation owns the required-field policy, category
//! parsing, and the user existence check.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Cost, Error};

/// Unvalidated cost entry as received from a client.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CostDraft {
    /// Owner identity key.
    pub user_id: Option<String>,
    /// Amount spent.
    pub sum: Option<f64>,
    /// Category name.
    pub category: Option<String>,
    /// Free text description.
    pub description: Option<String>,
    /// When the cost happened; the store assigns one when absent.
    pub date: Option<DateTime<Utc>>,
}

/// Domain use-case port for the cost write path.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CostCommand: Send + Sync {
    /// Validate and persist a cost entry.
    async fn record_cost(&self, draft: CostDraft) -> Result<Cost, Error>;
}
