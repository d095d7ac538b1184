//! PostgreSQL-backed `CostRepository` implementation using Diesel ORM.
//!
//! Rows are always read in ascending `id` order, which is insertion order.
//! Grouping happens in Rust on top of the range query so both adapters share
//! [`CategoryGroup::collect`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{CostPersistenceError, CostRepository};
use crate::domain::{CategoryGroup, Cost, CostId, NewCost, UserId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{CostRow, NewCostRow};
use super::pool::DbPool;
use super::schema::costs;

/// Diesel-backed implementation of the [`CostRepository`] port.
#[derive(Clone)]
pub struct DieselCostRepository {
    pool: DbPool,
}

impl DieselCostRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn query_error(error: diesel::result::Error) -> CostPersistenceError {
    map_diesel_error(
        error,
        CostPersistenceError::query,
        CostPersistenceError::connection,
    )
}

fn row_to_cost(row: CostRow) -> Result<Cost, CostPersistenceError> {
    let category = row.category.parse().map_err(|err| {
        warn!(cost_id = row.id, category = %row.category, "stored cost has unknown category");
        CostPersistenceError::query(format!("invalid stored cost: {err}"))
    })?;
    let user_id = UserId::new(&row.user_id).map_err(|err| {
        warn!(cost_id = row.id, "stored cost has blank user id");
        CostPersistenceError::query(format!("invalid stored cost: {err}"))
    })?;
    Ok(Cost {
        id: CostId::new(row.id),
        description: row.description,
        category,
        user_id,
        sum: row.amount,
        date: row.date,
    })
}

impl DieselCostRepository {
    async fn load_range(
        &self,
        user_id: &UserId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Cost>, CostPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, CostPersistenceError::connection))?;
        let rows = costs::table
            .filter(costs::user_id.eq(user_id.as_ref()))
            .filter(costs::date.ge(start))
            .filter(costs::date.lt(end))
            .order(costs::id.asc())
            .select(CostRow::as_select())
            .load::<CostRow>(&mut conn)
            .await
            .map_err(query_error)?;
        rows.into_iter().map(row_to_cost).collect()
    }
}

#[async_trait]
impl CostRepository for DieselCostRepository {
    async fn insert_cost(&self, cost: NewCost) -> Result<Cost, CostPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, CostPersistenceError::connection))?;
        let row = NewCostRow {
            user_id: cost.user_id.as_ref(),
            description: cost.description.as_str(),
            category: cost.category.as_str(),
            amount: cost.sum,
            date: cost.date,
        };
        let stored = diesel::insert_into(costs::table)
            .values(&row)
            .returning(CostRow::as_returning())
            .get_result::<CostRow>(&mut conn)
            .await
            .map_err(query_error)?;
        row_to_cost(stored)
    }

    async fn find_costs_in_range(
        &self,
        user_id: &UserId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Cost>, CostPersistenceError> {
        self.load_range(user_id, start, end).await
    }

    async fn group_costs_by_category(
        &self,
        user_id: &UserId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<CategoryGroup>, CostPersistenceError> {
        let costs = self.load_range(user_id, start, end).await?;
        Ok(CategoryGroup::collect(&costs))
    }

    async fn sum_costs_by_user(&self, user_id: &UserId) -> Result<f64, CostPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, CostPersistenceError::connection))?;
        let total = costs::table
            .filter(costs::user_id.eq(user_id.as_ref()))
            .select(diesel::dsl::sum(costs::amount))
            .first::<Option<f64>>(&mut conn)
            .await
            .map_err(query_error)?;
        Ok(total.unwrap_or(0.0))
    }
}
