//! HTTP adapter mapping for domain errors.
//!
//! Keeps the domain error HTTP-agnostic while giving every handler the same
//! JSON error body, status mapping and `trace-id` header.

use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::MissingField | ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::UserNotFound => StatusCode::NOT_FOUND,
        ErrorCode::StoreFailure => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::StoreFailure) {
        let mut redacted = Error::store_failure("Internal server error");
        if let Some(id) = error.trace_id() {
            redacted = redacted.with_trace_id(id.to_owned());
        }
        redacted
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(redact_if_internal(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Self::store_failure("Internal server error")
    }
}

/// Turn a body or query extraction failure into an `invalid_request` error.
///
/// Installed as the `JsonConfig` and `QueryConfig` error handler so malformed
/// input never falls back to actix-web's plain-text responses.
pub fn extraction_error(
    err: impl std::fmt::Display,
    _req: &HttpRequest,
) -> actix_web::Error {
    Error::invalid_request(format!("malformed request: {err}"))
        .with_details(json!({ "code": "malformed_request" }))
        .into()
}
