//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, test, web};
use serde_json::Value;

use crate::Trace;
use crate::domain::ports::{MockCostCommand, MockCostReportQuery, MockUserSummaryQuery};
use crate::inbound::http::api_scope;
use crate::inbound::http::state::HttpState;

/// Build handler state from mocks; ports left as `None` get a mock with no
/// expectations, so any call to them fails the test.
pub fn mock_state(
    costs: Option<MockCostCommand>,
    reports: Option<MockCostReportQuery>,
    users: Option<MockUserSummaryQuery>,
) -> HttpState {
    HttpState::new(
        Arc::new(costs.unwrap_or_default()),
        Arc::new(reports.unwrap_or_default()),
        Arc::new(users.unwrap_or_default()),
    )
}

/// App with the trace middleware and the `/api` scope mounted.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .service(api_scope())
}

/// Read a response body as JSON.
pub async fn read_json<B: MessageBody>(res: ServiceResponse<B>) -> Value {
    let bytes = test::read_body(res).await;
    serde_json::from_slice(&bytes).expect("response body is JSON")
}
