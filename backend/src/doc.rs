//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer together
//! with the schema wrappers from [`crate::inbound::http::schemas`], keeping
//! domain types free of utoipa derives.
//!
//! The document is served by Swagger UI in debug builds and exported via
//! `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::costs::CostRequest;
use crate::inbound::http::schemas::{
    CategorySchema, CostReportSchema, CostSchema, ErrorCodeSchema, ErrorSchema, ReportItemSchema,
    UserSummarySchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Expense tracker API",
        description = "Record costs, read monthly category reports, and look up per-user totals."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::costs::record_cost,
        crate::inbound::http::reports::get_report,
        crate::inbound::http::users::get_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CostRequest,
        CostSchema,
        CategorySchema,
        CostReportSchema,
        ReportItemSchema,
        UserSummarySchema,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "costs", description = "Recording individual costs"),
        (name = "reports", description = "Monthly category reports"),
        (name = "users", description = "User details and totals"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
