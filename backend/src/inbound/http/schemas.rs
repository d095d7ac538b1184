//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay free of `ToSchema`; the wrappers here mirror their
//! serialised shape and only exist for utoipa.

use std::collections::HashMap;

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub enum ErrorCodeSchema {
    /// A required field is absent or empty.
    #[schema(rename = "missing_field")]
    MissingField,
    /// A supplied value is malformed.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// No user exists for the given key.
    #[schema(rename = "user_not_found")]
    UserNotFound,
    /// The record store failed.
    #[schema(rename = "store_failure")]
    StoreFailure,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "missing_field")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "missing required field: sum")]
    message: String,
    /// Correlation identifier echoed in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary details such as the offending field.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Category`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Category, rename_all = "lowercase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub enum CategorySchema {
    /// Groceries and eating out.
    Food,
    /// Medical spend.
    Health,
    /// Rent, utilities and upkeep.
    Housing,
    /// Sports and fitness.
    Sport,
    /// Courses and books.
    Education,
    /// Accepted on write; never listed in reports.
    Fruit,
}

/// OpenAPI schema for [`crate::domain::Cost`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Cost, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CostSchema {
    /// Store-assigned key.
    #[schema(example = 1)]
    id: i64,
    #[schema(example = "clean")]
    description: String,
    category: CategorySchema,
    /// Owning user.
    #[schema(example = "1")]
    user_id: String,
    #[schema(example = 200.0)]
    sum: f64,
    /// When the spend happened.
    #[schema(value_type = String, format = DateTime, example = "2025-06-14T09:30:00Z")]
    date: String,
}

/// OpenAPI schema for [`crate::domain::ReportItem`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ReportItem)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ReportItemSchema {
    #[schema(example = 20.0)]
    sum: f64,
    #[schema(example = "gym")]
    description: String,
    /// Day of month of the cost date (UTC).
    #[schema(example = 14, minimum = 1, maximum = 31)]
    day: u32,
}

/// OpenAPI schema for [`crate::domain::CostReport`].
///
/// Echoed values are `null` when the input was not a number.
#[derive(ToSchema)]
#[schema(as = crate::domain::CostReport, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CostReportSchema {
    #[schema(example = 1)]
    user_id: Option<i64>,
    #[schema(example = 2025)]
    year: Option<i64>,
    #[schema(example = 6)]
    month: Option<i64>,
    /// One single-key object per category; non-empty categories first.
    costs: Vec<HashMap<String, Vec<ReportItemSchema>>>,
}

/// OpenAPI schema for [`crate::domain::UserSummary`].
#[derive(ToSchema)]
#[schema(as = crate::domain::UserSummary)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSummarySchema {
    #[schema(example = "John")]
    first_name: String,
    #[schema(example = "Doe")]
    last_name: String,
    #[schema(example = "1")]
    id: String,
    /// Sum of every cost the user has recorded.
    #[schema(example = 200.0)]
    total: f64,
}
