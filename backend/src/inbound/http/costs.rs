//! Cost recording endpoint.
//!
//! ```text
//! POST /api/costs {"userId":"1","sum":200,"category":"housing","description":"clean"}
//! ```

use actix_web::{post, web};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::ports::CostDraft;
use crate::domain::{Cost, Error, require_field, require_user_id};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{CostSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, Scalar, parse_amount, parse_optional_cost_date,
};

/// Request body for `POST /api/costs`.
///
/// The user key and the amount may arrive as JSON strings or numbers.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CostRequest {
    #[serde(alias = "userid")]
    #[schema(value_type = Option<String>, example = "1")]
    user_id: Option<Scalar>,
    #[schema(value_type = Option<f64>, example = 200.0)]
    sum: Option<Scalar>,
    #[schema(example = "housing")]
    category: Option<String>,
    #[schema(example = "clean")]
    description: Option<String>,
    /// RFC 3339 timestamp or `YYYY-MM-DD`; defaults to the time of insert.
    #[schema(example = "2025-06-14T09:30:00Z")]
    date: Option<String>,
}

impl TryFrom<CostRequest> for CostDraft {
    type Error = Error;

    fn try_from(request: CostRequest) -> Result<Self, Self::Error> {
        let CostRequest {
            user_id,
            sum,
            category,
            description,
            date,
        } = request;
        // Missing required fields win over malformed values, in field order.
        let user_id = user_id.map(Scalar::into_text);
        require_user_id(user_id.as_deref(), "userId")?;
        let sum = parse_amount(sum, FieldName::new("sum"))?;
        require_field(sum, "sum")?;
        require_field(category.as_deref(), "category")?;
        require_field(description.as_deref(), "description")?;
        Ok(Self {
            user_id,
            sum,
            category,
            description,
            date: parse_optional_cost_date(date.as_deref(), FieldName::new("date"))?,
        })
    }
}

/// Record a cost for an existing user.
#[utoipa::path(
    post,
    path = "/api/costs",
    request_body = CostRequest,
    responses(
        (status = 200, description = "Stored cost", body = CostSchema),
        (status = 400, description = "Missing field or invalid value", body = ErrorSchema),
        (status = 404, description = "Unknown user", body = ErrorSchema),
        (status = 500, description = "Record store failure", body = ErrorSchema)
    ),
    tags = ["costs"],
    operation_id = "recordCost"
)]
#[post("/costs")]
pub async fn record_cost(
    state: web::Data<HttpState>,
    payload: web::Json<CostRequest>,
) -> ApiResult<web::Json<Cost>> {
    let draft = CostDraft::try_from(payload.into_inner())?;
    let cost = state.costs.record_cost(draft).await?;
    Ok(web::Json(cost))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockCostCommand;
    use crate::domain::{Category, CostId, UserId};
    use crate::inbound::http::test_utils::{mock_state, read_json, test_app};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use chrono::{TimeZone, Utc};
    use rstest::rstest;
    use serde_json::{Value, json};

    fn stored(draft: &CostDraft) -> Cost {
        Cost {
            id: CostId::new(7),
            description: draft.description.clone().unwrap_or_default(),
            category: Category::Housing,
            user_id: UserId::new(draft.user_id.as_deref().unwrap_or("1")).expect("valid id"),
            sum: draft.sum.unwrap_or_default(),
            date: draft.date.unwrap_or_else(|| {
                Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0)
                    .single()
                    .expect("valid date")
            }),
        }
    }

    #[rstest]
    #[case::numbers(json!({ "userId": 1, "sum": 200, "category": "housing", "description": "clean" }))]
    #[case::strings(json!({ "userid": "1", "sum": "200", "category": "housing", "description": "clean" }))]
    #[actix_web::test]
    async fn record_cost_accepts_strings_and_numbers(#[case] body: Value) {
        let mut command = MockCostCommand::new();
        command
            .expect_record_cost()
            .withf(|draft| draft.user_id.as_deref() == Some("1") && draft.sum == Some(200.0))
            .times(1)
            .returning(|draft| Ok(stored(&draft)));
        let app = test::init_service(test_app(mock_state(Some(command), None, None))).await;

        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/costs")
                .set_json(body)
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::OK);
        let body = read_json(res).await;
        assert_eq!(body.get("id"), Some(&json!(7)));
        assert_eq!(body.get("userId"), Some(&json!("1")));
        assert_eq!(body.get("category"), Some(&json!("housing")));
    }

    #[rstest]
    #[case::bad_date(json!({ "userId": "1", "sum": 5, "category": "food", "description": "x", "date": "14/06/2025" }), "invalid_timestamp")]
    #[case::bad_sum(json!({ "userId": "1", "sum": "lots", "category": "food", "description": "x" }), "invalid_number")]
    #[case::not_an_object(json!("userId=1"), "malformed_request")]
    #[actix_web::test]
    async fn invalid_input_never_reaches_the_service(#[case] body: Value, #[case] code: &str) {
        let app = test::init_service(test_app(mock_state(
            Some(MockCostCommand::new()),
            None,
            None,
        )))
        .await;

        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/costs")
                .set_json(body)
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body = read_json(res).await;
        assert_eq!(body.get("code"), Some(&json!("invalid_request")));
        assert_eq!(
            body.get("details").and_then(|details| details.get("code")),
            Some(&json!(code))
        );
    }

    #[rstest]
    #[case::user_before_bad_sum(json!({ "sum": "abc", "category": "food", "description": "x" }), "userId")]
    #[case::blank_user(json!({ "userId": "", "sum": 5, "category": "food", "description": "x" }), "userId")]
    #[case::zero_sum(json!({ "userId": "1", "sum": "0", "category": "food", "description": "x" }), "sum")]
    #[case::category_before_bad_date(json!({ "userId": "1", "sum": 5, "description": "x", "date": "14/06/2025" }), "category")]
    #[case::description(json!({ "userId": "1", "sum": 5, "category": "food" }), "description")]
    #[actix_web::test]
    async fn missing_fields_are_reported_before_malformed_values(
        #[case] body: Value,
        #[case] field: &str,
    ) {
        let app = test::init_service(test_app(mock_state(
            Some(MockCostCommand::new()),
            None,
            None,
        )))
        .await;

        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/costs")
                .set_json(body)
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body = read_json(res).await;
        assert_eq!(body.get("code"), Some(&json!("missing_field")));
        assert_eq!(
            body.get("details").and_then(|details| details.get("field")),
            Some(&json!(field))
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn plain_date_is_midnight_utc() {
        let expected = Utc
            .with_ymd_and_hms(2025, 6, 14, 0, 0, 0)
            .single()
            .expect("valid date");
        let mut command = MockCostCommand::new();
        command
            .expect_record_cost()
            .withf(move |draft| draft.date == Some(expected))
            .times(1)
            .returning(|draft| Ok(stored(&draft)));
        let app = test::init_service(test_app(mock_state(Some(command), None, None))).await;

        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/costs")
                .set_json(json!({
                    "userId": "1",
                    "sum": 12.5,
                    "category": "food",
                    "description": "lunch",
                    "date": "2025-06-14",
                }))
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::OK);
    }

    #[rstest]
    #[actix_web::test]
    async fn missing_field_errors_map_to_bad_request() {
        let mut command = MockCostCommand::new();
        command
            .expect_record_cost()
            .times(1)
            .returning(|_| Err(Error::missing_field("description")));
        let app = test::init_service(test_app(mock_state(Some(command), None, None))).await;

        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/costs")
                .set_json(json!({ "userId": "1", "sum": 1, "category": "food", "description": "x" }))
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body = read_json(res).await;
        assert_eq!(body.get("code"), Some(&json!("missing_field")));
        assert!(body.get("traceId").is_some());
    }
}
