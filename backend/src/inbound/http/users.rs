//! User detail endpoint.

use actix_web::{get, web};

use crate::domain::UserSummary;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, UserSummarySchema};
use crate::inbound::http::state::HttpState;

/// Fetch a user together with the sum of all their costs.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "User identity key", example = "1")),
    responses(
        (status = 200, description = "User with running total", body = UserSummarySchema),
        (status = 404, description = "Unknown user", body = ErrorSchema),
        (status = 500, description = "Record store failure", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserSummary>> {
    let summary = state.users.user_summary(&path.into_inner()).await?;
    Ok(web::Json(summary))
}
