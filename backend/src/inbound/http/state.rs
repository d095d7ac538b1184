//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` and only see the driving
//! ports, so they stay testable without any storage behind them.

use std::sync::Arc;

use crate::domain::ports::{
    CostCommand, CostReportQuery, CostRepository, UserRepository, UserSummaryQuery,
};
use crate::domain::{CostCommandService, CostReportService, UserSummaryService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Cost write path.
    pub costs: Arc<dyn CostCommand>,
    /// Monthly report generation.
    pub reports: Arc<dyn CostReportQuery>,
    /// User detail read path.
    pub users: Arc<dyn UserSummaryQuery>,
}

impl HttpState {
    /// Bundle explicit port implementations.
    pub fn new(
        costs: Arc<dyn CostCommand>,
        reports: Arc<dyn CostReportQuery>,
        users: Arc<dyn UserSummaryQuery>,
    ) -> Self {
        Self {
            costs,
            reports,
            users,
        }
    }

    /// Wire the domain services over a pair of repositories.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use expense_tracker::inbound::http::state::HttpState;
    /// use expense_tracker::outbound::memory::InMemoryRecordStore;
    /// use mockable::DefaultClock;
    ///
    /// let store = Arc::new(InMemoryRecordStore::new(Arc::new(DefaultClock)));
    /// let state = HttpState::from_repositories(store.clone(), store);
    /// let _reports = state.reports.clone();
    /// ```
    pub fn from_repositories<U, C>(users: Arc<U>, costs: Arc<C>) -> Self
    where
        U: UserRepository + 'static,
        C: CostRepository + 'static,
    {
        Self::new(
            Arc::new(CostCommandService::new(users.clone(), costs.clone())),
            Arc::new(CostReportService::new(users.clone(), costs.clone())),
            Arc::new(UserSummaryService::new(users, costs)),
        )
    }
}
