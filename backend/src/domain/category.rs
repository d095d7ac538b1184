//! Cost categories and the report taxonomy.
//!
//! Every cost carries one [`Category`]. Reports are seeded from
//! [`REPORT_CATEGORIES`], which intentionally omits [`Category::Fruit`]:
//! fruit costs can be recorded but never show up in a monthly report.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Recognised cost category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Groceries and eating out.
    Food,
    /// Medical and wellbeing.
    Health,
    /// Rent, utilities, upkeep.
    Housing,
    /// Sport and fitness.
    Sport,
    /// Courses, books, tuition.
    Education,
    /// Accepted on entry, excluded from reports.
    Fruit,
}

/// Ordered categories that make up every report skeleton.
pub const REPORT_CATEGORIES: [Category; 5] = [
    Category::Food,
    Category::Health,
    Category::Housing,
    Category::Sport,
    Category::Education,
];

/// Returned when a category name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct CategoryParseError(pub String);

impl Category {
    /// Every category accepted on a cost entry.
    pub const ALL: [Self; 6] = [
        Self::Food,
        Self::Health,
        Self::Housing,
        Self::Sport,
        Self::Education,
        Self::Fruit,
    ];

    /// Lower-case wire name.
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::domain::Category;
    ///
    /// assert_eq!(Category::Housing.as_str(), "housing");
    /// ```
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Health => "health",
            Self::Housing => "housing",
            Self::Sport => "sport",
            Self::Education => "education",
            Self::Fruit => "fruit",
        }
    }

    /// Whether the category is part of the report taxonomy.
    pub fn is_reported(self) -> bool {
        REPORT_CATEGORIES.contains(&self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| CategoryParseError(s.to_owned()))
    }
}
