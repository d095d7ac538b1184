//! Port abstraction for cost persistence adapters and their errors.
//!
//! Range queries take a half-open `[start, end)` window. Adapters return
//! costs in insertion order, which equals ascending [`CostId`] order.
//!
//! [`CostId`]: crate::domain::CostId

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{CategoryGroup, Cost, NewCost, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by cost repository adapters.
    pub enum CostPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "cost repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "cost repository query failed: {message}",
    }
}

/// Storage for individual cost entries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CostRepository: Send + Sync {
    /// Persist a cost, assigning its id and, when absent, its date.
    async fn insert_cost(&self, cost: NewCost) -> Result<Cost, CostPersistenceError>;

    /// Costs of `user_id` dated within `[start, end)`, in insertion order.
    async fn find_costs_in_range(
        &self,
        user_id: &UserId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Cost>, CostPersistenceError>;

    /// Costs of `user_id` dated within `[start, end)`, grouped by category.
    ///
    /// Groups are sorted by category name ascending; items keep insertion
    /// order.
    async fn group_costs_by_category(
        &self,
        user_id: &UserId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<CategoryGroup>, CostPersistenceError>;

    /// Sum of every cost recorded for `user_id`; `0.0` when there are none.
    async fn sum_costs_by_user(&self, user_id: &UserId) -> Result<f64, CostPersistenceError>;
}
