//! User detail read path and the running total aggregator.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::cost_service::map_cost_persistence_error;
use crate::domain::ports::{CostRepository, UserRepository, UserSummaryQuery};
use crate::domain::{DomainResult, Error, User, UserExistenceGate, UserId, require_user_id};

/// Sum of every cost recorded for `user_id`, with no date filter.
///
/// Returns `0.0` for a user without costs. Store failures propagate as
/// `store_failure`.
pub async fn total_spend<C>(costs: &C, user_id: &UserId) -> DomainResult<f64>
where
    C: CostRepository + ?Sized,
{
    costs
        .sum_costs_by_user(user_id)
        .await
        .map_err(map_cost_persistence_error)
}

/// A user together with their total spend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Identity key.
    pub id: String,
    /// Sum of all recorded costs.
    pub total: f64,
}

impl UserSummary {
    /// Combine a user with a computed total.
    #[must_use]
    pub fn new(user: &User, total: f64) -> Self {
        Self {
            first_name: user.first_name().to_owned(),
            last_name: user.last_name().to_owned(),
            id: user.id().to_string(),
            total,
        }
    }
}

/// Service implementing [`UserSummaryQuery`].
#[derive(Clone)]
pub struct UserSummaryService<U, C> {
    gate: UserExistenceGate<U>,
    costs: Arc<C>,
}

impl<U, C> UserSummaryService<U, C> {
    /// Create a service over the given repositories.
    pub fn new(users: Arc<U>, costs: Arc<C>) -> Self {
        Self {
            gate: UserExistenceGate::new(users),
            costs,
        }
    }
}

#[async_trait]
impl<U, C> UserSummaryQuery for UserSummaryService<U, C>
where
    U: UserRepository,
    C: CostRepository,
{
    async fn user_summary(&self, id: &str) -> Result<UserSummary, Error> {
        let user_id = require_user_id(Some(id), "id")?;
        let user = self.gate.require_user(&user_id).await?;
        let total = total_spend(self.costs.as_ref(), &user_id).await?;
        Ok(UserSummary::new(&user, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::{CostPersistenceError, MockCostRepository, MockUserRepository};
    use rstest::rstest;
    use serde_json::json;

    fn users_with_john() -> MockUserRepository {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .withf(|id| id.as_ref() == "1")
            .times(1)
            .return_once(|id| Ok(Some(User::new(id.clone(), "John", "Doe").expect("user"))));
        users
    }

    #[rstest]
    #[case(0.0)]
    #[case(215.5)]
    #[tokio::test]
    async fn summary_includes_total(#[case] total: f64) {
        let mut costs = MockCostRepository::new();
        costs
            .expect_sum_costs_by_user()
            .times(1)
            .return_once(move |_| Ok(total));
        let service = UserSummaryService::new(Arc::new(users_with_john()), Arc::new(costs));

        let summary = service.user_summary(" 1 ").await.expect("summary");
        assert_eq!(
            serde_json::to_value(&summary).expect("json"),
            json!({ "first_name": "John", "last_name": "Doe", "id": "1", "total": total })
        );
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().times(1).return_once(|_| Ok(None));
        let service = UserSummaryService::new(Arc::new(users), Arc::new(MockCostRepository::new()));

        let err = service.user_summary("99999").await.expect_err("missing user");
        assert_eq!(err.code(), ErrorCode::UserNotFound);
        assert_eq!(
            err.details().and_then(|details| details.get("userId")),
            Some(&json!("99999"))
        );
    }

    #[tokio::test]
    async fn blank_id_is_missing() {
        let service = UserSummaryService::new(
            Arc::new(MockUserRepository::new()),
            Arc::new(MockCostRepository::new()),
        );

        let err = service.user_summary("  ").await.expect_err("blank id");
        assert_eq!(err.code(), ErrorCode::MissingField);
    }

    #[tokio::test]
    async fn total_spend_propagates_store_failure() {
        let mut costs = MockCostRepository::new();
        costs
            .expect_sum_costs_by_user()
            .times(1)
            .return_once(|_| Err(CostPersistenceError::connection("timeout")));

        let err = total_spend(&costs, &UserId::new("1").expect("valid id"))
            .await
            .expect_err("store failure");
        assert_eq!(err.code(), ErrorCode::StoreFailure);
    }
}
