//! Process-local record store.
//!
//! Backs both [`UserRepository`] and [`CostRepository`] with tables held
//! behind a single `std::sync::Mutex`. The lock is taken for one operation at
//! a time and never held across an await point. Used by tests and by the
//! server when no database URL is configured.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockable::Clock;

use crate::domain::ports::{
    CostPersistenceError, CostRepository, UserPersistenceError, UserRepository,
};
use crate::domain::{CategoryGroup, Cost, CostId, NewCost, User, UserId};

#[derive(Default)]
struct Tables {
    users: HashMap<UserId, User>,
    costs: Vec<Cost>,
    last_cost_id: i64,
}

/// In-memory implementation of the record store ports.
///
/// Cost ids start at `1` and increase by one per insert. Costs inserted
/// without a date are stamped with the injected clock's current UTC time.
pub struct InMemoryRecordStore {
    clock: Arc<dyn Clock>,
    tables: Mutex<Tables>,
}

impl InMemoryRecordStore {
    /// Create an empty store stamping default dates from `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            tables: Mutex::new(Tables::default()),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, String> {
        self.tables
            .lock()
            .map_err(|_| "in-memory store lock poisoned".to_owned())
    }

    fn costs_in_range(
        &self,
        user_id: &UserId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Cost>, CostPersistenceError> {
        let tables = self.lock().map_err(CostPersistenceError::connection)?;
        Ok(tables
            .costs
            .iter()
            .filter(|cost| &cost.user_id == user_id && start <= cost.date && cost.date < end)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl UserRepository for InMemoryRecordStore {
    async fn upsert(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut tables = self.lock().map_err(UserPersistenceError::connection)?;
        tables.users.insert(user.id().clone(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let tables = self.lock().map_err(UserPersistenceError::connection)?;
        Ok(tables.users.get(id).cloned())
    }
}

#[async_trait]
impl CostRepository for InMemoryRecordStore {
    async fn insert_cost(&self, cost: NewCost) -> Result<Cost, CostPersistenceError> {
        let date = cost.date.unwrap_or_else(|| self.clock.utc());
        let mut tables = self.lock().map_err(CostPersistenceError::connection)?;
        if !tables.users.contains_key(&cost.user_id) {
            return Err(CostPersistenceError::query(
                "referenced user does not exist",
            ));
        }
        tables.last_cost_id += 1;
        let stored = Cost {
            id: CostId::new(tables.last_cost_id),
            description: cost.description,
            category: cost.category,
            user_id: cost.user_id,
            sum: cost.sum,
            date,
        };
        tables.costs.push(stored.clone());
        Ok(stored)
    }

    async fn find_costs_in_range(
        &self,
        user_id: &UserId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Cost>, CostPersistenceError> {
        self.costs_in_range(user_id, start, end)
    }

    async fn group_costs_by_category(
        &self,
        user_id: &UserId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<CategoryGroup>, CostPersistenceError> {
        let costs = self.costs_in_range(user_id, start, end)?;
        Ok(CategoryGroup::collect(&costs))
    }

    async fn sum_costs_by_user(&self, user_id: &UserId) -> Result<f64, CostPersistenceError> {
        let tables = self.lock().map_err(CostPersistenceError::connection)?;
        Ok(tables
            .costs
            .iter()
            .filter(|cost| &cost.user_id == user_id)
            .map(|cost| cost.sum)
            .sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, MonthWindow};
    use chrono::{Local, TimeDelta, TimeZone};
    use rstest::{fixture, rstest};

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn local(&self) -> DateTime<Local> {
            self.0.with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    fn user_id(raw: &str) -> UserId {
        UserId::new(raw).expect("valid id")
    }

    fn new_cost(
        user: &str,
        category: Category,
        sum: f64,
        date: Option<DateTime<Utc>>,
    ) -> NewCost {
        NewCost {
            user_id: user_id(user),
            description: format!("{category} spend"),
            category,
            sum,
            date,
        }
    }

    #[fixture]
    async fn store() -> InMemoryRecordStore {
        let store = InMemoryRecordStore::new(Arc::new(FixedClock(at(2025, 6, 15, 8))));
        for (id, first) in [("1", "John"), ("2", "Jane")] {
            let user = User::new(user_id(id), first, "Doe").expect("valid user");
            store.upsert(&user).await.expect("seed user");
        }
        store
    }

    #[rstest]
    #[tokio::test]
    async fn insert_assigns_ascending_ids_and_default_date(
        #[future] store: InMemoryRecordStore,
    ) {
        let store = store.await;
        let first = store
            .insert_cost(new_cost("1", Category::Food, 5.0, None))
            .await
            .expect("insert");
        let second = store
            .insert_cost(new_cost("1", Category::Sport, 7.0, Some(at(2025, 5, 2, 9))))
            .await
            .expect("insert");

        assert_eq!(first.id, CostId::new(1));
        assert_eq!(second.id, CostId::new(2));
        assert_eq!(first.date, at(2025, 6, 15, 8));
        assert_eq!(second.date, at(2025, 5, 2, 9));
    }

    #[rstest]
    #[tokio::test]
    async fn insert_rejects_unknown_user(#[future] store: InMemoryRecordStore) {
        let store = store.await;
        let err = store
            .insert_cost(new_cost("404", Category::Food, 5.0, None))
            .await
            .expect_err("unknown user");
        assert!(matches!(err, CostPersistenceError::Query { .. }));
    }

    #[rstest]
    #[tokio::test]
    async fn range_query_covers_the_whole_last_day(#[future] store: InMemoryRecordStore) {
        let store = store.await;
        let window = MonthWindow::for_month(2024, 2).expect("window");
        let dates = [
            window.start(),
            window.end() - TimeDelta::milliseconds(1),
            window.end() - TimeDelta::microseconds(500),
            window.end(),
            window.start() - TimeDelta::nanoseconds(1),
        ];
        for date in dates {
            store
                .insert_cost(new_cost("1", Category::Health, 1.0, Some(date)))
                .await
                .expect("insert");
        }

        let found = store
            .find_costs_in_range(&user_id("1"), window.start(), window.end())
            .await
            .expect("range query");
        let ids: Vec<_> = found.iter().map(|cost| cost.id.get()).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[rstest]
    #[tokio::test]
    async fn grouping_is_per_user_and_sorted_by_category(
        #[future] store: InMemoryRecordStore,
    ) {
        let store = store.await;
        let june = Some(at(2025, 6, 10, 12));
        for cost in [
            new_cost("1", Category::Sport, 1.0, june),
            new_cost("2", Category::Food, 2.0, june),
            new_cost("1", Category::Education, 3.0, june),
            new_cost("1", Category::Sport, 4.0, june),
        ] {
            store.insert_cost(cost).await.expect("insert");
        }
        let window = MonthWindow::for_month(2025, 6).expect("window");

        let groups = store
            .group_costs_by_category(&user_id("1"), window.start(), window.end())
            .await
            .expect("grouping");

        let shape: Vec<_> = groups
            .iter()
            .map(|group| {
                (
                    group.category,
                    group.items.iter().map(|item| item.sum).collect::<Vec<_>>(),
                )
            })
            .collect();
        assert_eq!(
            shape,
            [
                (Category::Education, vec![3.0]),
                (Category::Sport, vec![1.0, 4.0]),
            ]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn totals_span_all_dates(#[future] store: InMemoryRecordStore) {
        let store = store.await;
        store
            .insert_cost(new_cost("1", Category::Food, 10.5, Some(at(2019, 1, 1, 0))))
            .await
            .expect("insert");
        store
            .insert_cost(new_cost("1", Category::Fruit, 4.5, None))
            .await
            .expect("insert");

        let total = store
            .sum_costs_by_user(&user_id("1"))
            .await
            .expect("total");
        let none = store
            .sum_costs_by_user(&user_id("2"))
            .await
            .expect("total");
        assert!((total - 15.0).abs() < f64::EPSILON);
        assert!(none.abs() < f64::EPSILON);
    }

    #[rstest]
    #[tokio::test]
    async fn upsert_replaces_existing_user(#[future] store: InMemoryRecordStore) {
        let store = store.await;
        let renamed = User::new(user_id("1"), "Johnny", "Doe").expect("valid user");
        store.upsert(&renamed).await.expect("upsert");

        let found = store
            .find_by_id(&user_id("1"))
            .await
            .expect("lookup")
            .expect("user present");
        assert_eq!(found.first_name(), "Johnny");
    }
}
