//! Cost entries and the grouped shape consumed by reports.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use super::{Category, UserId};

/// Storage-assigned cost identifier. Ascending ids follow insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CostId(i64);

impl CostId {
    /// Wrap a raw identifier issued by a store.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for CostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cost entry accepted by the write path, before the store assigns an id.
///
/// When `date` is `None` the store records the moment of insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCost {
    /// Owner of the cost.
    pub user_id: UserId,
    /// Free text description.
    pub description: String,
    /// Category tag.
    pub category: Category,
    /// Amount spent.
    pub sum: f64,
    /// When the cost happened.
    pub date: Option<DateTime<Utc>>,
}

/// Persisted cost entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cost {
    /// Storage identifier.
    pub id: CostId,
    /// Free text description.
    pub description: String,
    /// Category tag.
    pub category: Category,
    /// Owner of the cost.
    #[serde(alias = "userid")]
    pub user_id: UserId,
    /// Amount spent.
    pub sum: f64,
    /// When the cost happened.
    pub date: DateTime<Utc>,
}

impl Cost {
    /// Project the cost into a report line item.
    ///
    /// # Examples
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use expense_tracker::domain::{Category, Cost, CostId, UserId};
    ///
    /// let cost = Cost {
    ///     id: CostId::new(1),
    ///     description: "clean".into(),
    ///     category: Category::Housing,
    ///     user_id: UserId::new("1").expect("valid id"),
    ///     sum: 200.0,
    ///     date: Utc.with_ymd_and_hms(2025, 6, 14, 9, 0, 0).single().expect("valid date"),
    /// };
    /// assert_eq!(cost.to_report_item().day, 14);
    /// ```
    #[must_use]
    pub fn to_report_item(&self) -> ReportItem {
        ReportItem {
            sum: self.sum,
            description: self.description.clone(),
            day: self.date.day(),
        }
    }
}

/// One line of a report category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportItem {
    /// Amount spent.
    pub sum: f64,
    /// Free text description.
    pub description: String,
    /// Day of month (UTC) the cost happened on, 1 to 31.
    pub day: u32,
}

/// Costs of one category within a window, as returned by the store's
/// grouping operation.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup {
    /// Category shared by every item.
    pub category: Category,
    /// Items in store order.
    pub items: Vec<ReportItem>,
}

impl CategoryGroup {
    /// Group costs by category.
    ///
    /// Groups are sorted by category name ascending; items keep the order in
    /// which the costs were supplied.
    pub fn collect<'a>(costs: impl IntoIterator<Item = &'a Cost>) -> Vec<Self> {
        let mut grouped: BTreeMap<&'static str, Self> = BTreeMap::new();
        for cost in costs {
            grouped
                .entry(cost.category.as_str())
                .or_insert_with(|| Self {
                    category: cost.category,
                    items: Vec::new(),
                })
                .items
                .push(cost.to_report_item());
        }
        grouped.into_values().collect()
    }
}
