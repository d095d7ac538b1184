//! Monthly cost report engine.
//!
//! A report covers one user and one calendar month (UTC). Costs are grouped
//! by category and poured into a fixed skeleton built from
//! [`REPORT_CATEGORIES`], so every report lists the same five categories:
//! non-empty ones first, each partition in alphabetical order.
//!
//! The pure steps ([`MonthWindow::for_month`], [`build_report_costs`]) are
//! kept apart from [`CostReportService`], which adds the required-field and
//! existence checks plus the single store round-trip.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::json;
use tracing::debug;

use crate::domain::cost_service::map_cost_persistence_error;
use crate::domain::ports::{CostReportQuery, CostRepository, ReportRequest, UserRepository};
use crate::domain::{
    Category, CategoryGroup, DomainResult, Error, REPORT_CATEGORIES, ReportItem,
    UserExistenceGate, require_field, require_user_id,
};

/// Integer parsed from query text, echoed back in the report.
///
/// Parsing reads an integer prefix: optional leading whitespace, an optional
/// sign, then decimal digits. Text without such a prefix (or one that does
/// not fit an `i64`) is not a number and serialises as `null`.
///
/// # Examples
/// ```
/// use expense_tracker::domain::NumericEcho;
///
/// assert_eq!(NumericEcho::parse("2025").value(), Some(2025));
/// assert_eq!(NumericEcho::parse(" 6th").value(), Some(6));
/// assert_eq!(NumericEcho::parse("abc").value(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NumericEcho(Option<i64>);

impl NumericEcho {
    /// Parse the integer prefix of `raw`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let rest = raw.trim_start();
        let (negative, unsigned) = match rest.strip_prefix('-') {
            Some(unsigned) => (true, unsigned),
            None => (false, rest.strip_prefix('+').unwrap_or(rest)),
        };
        let digits: String = unsigned
            .chars()
            .take_while(char::is_ascii_digit)
            .collect();
        if digits.is_empty() {
            return Self(None);
        }
        let magnitude = digits.parse::<i64>().ok();
        Self(magnitude.map(|value| if negative { -value } else { value }))
    }

    /// Parsed value, `None` when the text was not a number.
    #[must_use]
    pub const fn value(self) -> Option<i64> {
        self.0
    }
}

impl From<i64> for NumericEcho {
    fn from(value: i64) -> Self {
        Self(Some(value))
    }
}

impl Serialize for NumericEcho {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Some(value) => serializer.serialize_i64(value),
            None => serializer.serialize_none(),
        }
    }
}

/// UTC window covering every instant of one calendar month.
///
/// The window is half-open, `[start, end)`: `end` is the first instant of the
/// following month, so sub-millisecond timestamps late on the last day still
/// fall inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl MonthWindow {
    /// Window for `(year, month)`, with `month` normalised by calendar
    /// overflow: `13` is January of the next year, `0` is December of the
    /// previous one.
    ///
    /// `start` is midnight on the first day; `end` is midnight on the first
    /// day of the next month.
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::domain::MonthWindow;
    ///
    /// let window = MonthWindow::for_month(2024, 2).expect("valid month");
    /// assert_eq!(window.start().to_rfc3339(), "2024-02-01T00:00:00+00:00");
    /// assert_eq!(window.end().to_rfc3339(), "2024-03-01T00:00:00+00:00");
    /// ```
    pub fn for_month(year: i64, month: i64) -> DomainResult<Self> {
        let out_of_range = || {
            Error::invalid_request("year and month are out of range").with_details(json!({
                "year": year,
                "month": month,
                "code": "month_out_of_range",
            }))
        };
        let total = year
            .checked_mul(12)
            .and_then(|months| months.checked_add(month))
            .and_then(|months| months.checked_sub(1))
            .ok_or_else(out_of_range)?;
        let first = first_day(total).ok_or_else(out_of_range)?;
        let next = total
            .checked_add(1)
            .and_then(first_day)
            .ok_or_else(out_of_range)?;
        let start = first.and_time(NaiveTime::MIN).and_utc();
        let end = next.and_time(NaiveTime::MIN).and_utc();
        Ok(Self { start, end })
    }

    /// First instant of the month.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// First instant of the following month, excluded from the window.
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }
}

fn first_day(total_months: i64) -> Option<NaiveDate> {
    let year = i32::try_from(total_months.div_euclid(12)).ok()?;
    let month = u32::try_from(total_months.rem_euclid(12) + 1).ok()?;
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// One category of a report with its items.
///
/// Serialises as a single-entry map, `{"food": [...]}`.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryEntry {
    /// Category name key.
    pub category: Category,
    /// Items dated inside the report window.
    pub items: Vec<ReportItem>,
}

impl CategoryEntry {
    fn empty(category: Category) -> Self {
        Self {
            category,
            items: Vec::new(),
        }
    }
}

impl Serialize for CategoryEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.category.as_str(), &self.items)?;
        map.end()
    }
}

/// Fill the report skeleton from grouped costs.
///
/// Groups outside [`REPORT_CATEGORIES`] are dropped. The result holds one
/// entry per reported category, sorted by name, with empty entries moved to
/// the end.
///
/// # Examples
/// ```
/// use expense_tracker::domain::{Category, CategoryGroup, ReportItem, build_report_costs};
///
/// let groups = vec![CategoryGroup {
///     category: Category::Sport,
///     items: vec![ReportItem { sum: 20.0, description: "gym".into(), day: 3 }],
/// }];
/// let entries = build_report_costs(groups);
/// let order: Vec<_> = entries.iter().map(|entry| entry.category.as_str()).collect();
/// assert_eq!(order, ["sport", "education", "food", "health", "housing"]);
/// ```
#[must_use]
pub fn build_report_costs(groups: Vec<CategoryGroup>) -> Vec<CategoryEntry> {
    let mut entries: Vec<CategoryEntry> = REPORT_CATEGORIES
        .into_iter()
        .map(CategoryEntry::empty)
        .collect();

    for group in groups {
        match entries
            .iter_mut()
            .find(|entry| entry.category == group.category)
        {
            Some(entry) => entry.items = group.items,
            None => debug!(
                category = %group.category,
                items = group.items.len(),
                "dropping category outside report taxonomy"
            ),
        }
    }

    entries.sort_by(|a, b| a.category.as_str().cmp(b.category.as_str()));
    let (mut filled, empty): (Vec<_>, Vec<_>) = entries
        .into_iter()
        .partition(|entry| !entry.items.is_empty());
    filled.extend(empty);
    filled
}

/// Monthly report for one user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostReport {
    /// Echo of the requested identity key.
    pub user_id: NumericEcho,
    /// Echo of the requested year.
    pub year: NumericEcho,
    /// Echo of the requested month.
    pub month: NumericEcho,
    /// One entry per reported category.
    pub costs: Vec<CategoryEntry>,
}

/// Report service implementing [`CostReportQuery`].
#[derive(Clone)]
pub struct CostReportService<U, C> {
    gate: UserExistenceGate<U>,
    costs: Arc<C>,
}

impl<U, C> CostReportService<U, C> {
    /// Create a service over the given repositories.
    pub fn new(users: Arc<U>, costs: Arc<C>) -> Self {
        Self {
            gate: UserExistenceGate::new(users),
            costs,
        }
    }
}

fn parse_required_number(raw: &str, field: &str) -> DomainResult<(i64, NumericEcho)> {
    let echo = NumericEcho::parse(raw);
    echo.value().map(|value| (value, echo)).ok_or_else(|| {
        Error::invalid_request(format!("{field} must be a number")).with_details(json!({
            "field": field,
            "value": raw,
            "code": "invalid_number",
        }))
    })
}

#[async_trait]
impl<U, C> CostReportQuery for CostReportService<U, C>
where
    U: UserRepository,
    C: CostRepository,
{
    async fn generate_report(&self, request: ReportRequest) -> Result<CostReport, Error> {
        let user_id = require_user_id(request.id.as_deref(), "id")?;
        let year = require_field(request.year.as_deref(), "year")?;
        let month = require_field(request.month.as_deref(), "month")?;

        let (year_value, year_echo) = parse_required_number(year, "year")?;
        let (month_value, month_echo) = parse_required_number(month, "month")?;
        let window = MonthWindow::for_month(year_value, month_value)?;

        if !self.gate.user_exists(&user_id).await? {
            return Err(Error::user_not_found(user_id.as_ref()));
        }

        let groups = self
            .costs
            .group_costs_by_category(&user_id, window.start(), window.end())
            .await
            .map_err(map_cost_persistence_error)?;

        Ok(CostReport {
            user_id: NumericEcho::parse(user_id.as_ref()),
            year: year_echo,
            month: month_echo,
            costs: build_report_costs(groups),
        })
    }
}
