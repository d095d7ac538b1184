//! Monthly report endpoint.

use actix_web::{get, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::CostReport;
use crate::domain::ports::ReportRequest;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{CostReportSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;

/// Query string for `GET /api/reports`.
///
/// Values stay as text; the report service applies its own number rules.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReportQuery {
    /// User identity key.
    #[param(example = "1")]
    id: Option<String>,
    /// Calendar year.
    #[param(example = "2025")]
    year: Option<String>,
    /// Calendar month, 1-based. Values outside 1-12 roll over.
    #[param(example = "6")]
    month: Option<String>,
}

impl From<ReportQuery> for ReportRequest {
    fn from(query: ReportQuery) -> Self {
        Self {
            id: query.id,
            year: query.year,
            month: query.month,
        }
    }
}

/// Build the monthly category report for one user.
#[utoipa::path(
    get,
    path = "/api/reports",
    params(ReportQuery),
    responses(
        (status = 200, description = "Monthly report", body = CostReportSchema),
        (status = 400, description = "Missing or non-numeric parameter", body = ErrorSchema),
        (status = 404, description = "Unknown user", body = ErrorSchema),
        (status = 500, description = "Record store failure", body = ErrorSchema)
    ),
    tags = ["reports"],
    operation_id = "getReport"
)]
#[get("/reports")]
pub async fn get_report(
    state: web::Data<HttpState>,
    query: web::Query<ReportQuery>,
) -> ApiResult<web::Json<CostReport>> {
    let report = state
        .reports
        .generate_report(query.into_inner().into())
        .await?;
    Ok(web::Json(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockCostReportQuery;
    use crate::domain::{Error, NumericEcho, build_report_costs};
    use crate::inbound::http::test_utils::{mock_state, read_json, test_app};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[actix_web::test]
    async fn query_parameters_are_forwarded_verbatim() {
        let mut reports = MockCostReportQuery::new();
        reports
            .expect_generate_report()
            .withf(|request| {
                request
                    == &ReportRequest {
                        id: Some("1".to_owned()),
                        year: Some("2025".to_owned()),
                        month: Some("06x".to_owned()),
                    }
            })
            .times(1)
            .returning(|_| {
                Ok(CostReport {
                    user_id: NumericEcho::from(1),
                    year: NumericEcho::from(2025),
                    month: NumericEcho::from(6),
                    costs: build_report_costs(Vec::new()),
                })
            });
        let app = test::init_service(test_app(mock_state(None, Some(reports), None))).await;

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/reports?id=1&year=2025&month=06x")
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::OK);
        let body = read_json(res).await;
        assert_eq!(body.get("userId"), Some(&json!(1)));
        assert_eq!(body.get("month"), Some(&json!(6)));
        assert_eq!(
            body.get("costs"),
            Some(&json!([
                { "education": [] },
                { "food": [] },
                { "health": [] },
                { "housing": [] },
                { "sport": [] }
            ]))
        );
    }

    #[rstest]
    #[case(Error::missing_field("month"), StatusCode::BAD_REQUEST)]
    #[case(Error::user_not_found("99999"), StatusCode::NOT_FOUND)]
    #[case(Error::store_failure("connection reset"), StatusCode::INTERNAL_SERVER_ERROR)]
    #[actix_web::test]
    async fn domain_errors_map_to_status(#[case] error: Error, #[case] status: StatusCode) {
        let mut reports = MockCostReportQuery::new();
        reports
            .expect_generate_report()
            .times(1)
            .return_once(move |_| Err(error));
        let app = test::init_service(test_app(mock_state(None, Some(reports), None))).await;

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/reports?id=99999&year=2025")
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), status);
    }
}
