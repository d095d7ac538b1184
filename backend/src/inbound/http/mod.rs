//! HTTP inbound adapter exposing REST endpoints.
//!
//! Every endpoint lives under `/api`. Body and query extraction failures are
//! routed through [`error::extraction_error`] so clients always receive the
//! JSON error envelope.

pub mod costs;
pub mod error;
pub mod health;
pub mod reports;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

use actix_web::{Scope, web};

pub use error::ApiResult;

use self::error::extraction_error;

/// The `/api` scope with all expense endpoints and extractor error handlers.
///
/// Handlers expect a `web::Data<state::HttpState>` registered on the app.
pub fn api_scope() -> Scope {
    web::scope("/api")
        .app_data(web::JsonConfig::default().error_handler(|err, req| extraction_error(err, req)))
        .app_data(web::QueryConfig::default().error_handler(|err, req| extraction_error(err, req)))
        .service(costs::record_cost)
        .service(reports::get_report)
        .service(users::get_user)
}
