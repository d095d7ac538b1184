//! Driving port for the user detail read path.

use async_trait::async_trait;

use crate::domain::{Error, UserSummary};

/// Domain use-case port returning a user with their running total.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserSummaryQuery: Send + Sync {
    /// Look up the user keyed by `id` and total their costs.
    async fn user_summary(&self, id: &str) -> Result<UserSummary, Error>;
}
