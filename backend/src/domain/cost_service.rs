//! Cost recording service.
//!
//! Implements the [`CostCommand`] driving port: required fields first (in a
//! fixed order), then category parsing, then the user existence check, and
//! only then the insert. The check-then-insert pair is not atomic, so the
//! stores also refuse a cost whose user has vanished in between; that
//! rejection surfaces as `store_failure`.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, error};

use crate::domain::ports::{
    CostCommand, CostDraft, CostPersistenceError, CostRepository, UserRepository,
};
use crate::domain::{
    Category, Cost, Error, NewCost, UserExistenceGate, require_field, require_user_id,
};

/// Map a cost store failure into a domain error, logging the cause.
pub(crate) fn map_cost_persistence_error(err: CostPersistenceError) -> Error {
    error!(error = %err, "cost store failure");
    Error::store_failure(err.to_string())
}

/// Write-path service implementing [`CostCommand`].
#[derive(Clone)]
pub struct CostCommandService<U, C> {
    gate: UserExistenceGate<U>,
    costs: Arc<C>,
}

impl<U, C> CostCommandService<U, C> {
    /// Create a service over the given repositories.
    pub fn new(users: Arc<U>, costs: Arc<C>) -> Self {
        Self {
            gate: UserExistenceGate::new(users),
            costs,
        }
    }
}

fn parse_category(raw: &str) -> Result<Category, Error> {
    raw.parse().map_err(|_| {
        Error::invalid_request(format!("unknown category: {raw}")).with_details(json!({
            "field": "category",
            "value": raw,
            "code": "invalid_category",
        }))
    })
}

#[async_trait]
impl<U, C> CostCommand for CostCommandService<U, C>
where
    U: UserRepository,
    C: CostRepository,
{
    async fn record_cost(&self, draft: CostDraft) -> Result<Cost, Error> {
        let user_id = require_user_id(draft.user_id.as_deref(), "userId")?;
        let sum = require_field(draft.sum, "sum")?;
        let category = require_field(draft.category.as_deref(), "category")?;
        let description = require_field(draft.description.as_deref(), "description")?;
        let category = parse_category(category)?;

        self.gate.require_user(&user_id).await?;

        let cost = self
            .costs
            .insert_cost(NewCost {
                user_id,
                description: description.to_owned(),
                category,
                sum,
                date: draft.date,
            })
            .await
            .map_err(map_cost_persistence_error)?;
        debug!(cost_id = %cost.id, user_id = %cost.user_id, "cost recorded");
        Ok(cost)
    }
}
