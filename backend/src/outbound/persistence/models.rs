//! Internal Diesel row structs for database operations.
//!
//! These types never leave the persistence layer; repositories convert them
//! into domain values.

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

use super::schema::{costs, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub birthday: Option<NaiveDate>,
    pub marital_status: Option<String>,
}

/// Insertable struct for creating or replacing user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub birthday: Option<NaiveDate>,
    pub marital_status: Option<&'a str>,
}

/// Row struct for reading from the costs table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = costs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CostRow {
    pub id: i64,
    pub user_id: String,
    pub description: String,
    pub category: String,
    pub amount: f64,
    pub date: DateTime<Utc>,
}

/// Insertable struct for new cost records.
///
/// A `None` date is sent as `DEFAULT`, letting the database stamp `now()`.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = costs)]
pub(crate) struct NewCostRow<'a> {
    pub user_id: &'a str,
    pub description: &'a str,
    pub category: &'a str,
    pub amount: f64,
    pub date: Option<DateTime<Utc>>,
}
