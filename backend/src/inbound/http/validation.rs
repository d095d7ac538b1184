//! Shared validation helpers for inbound HTTP adapters.
//!
//! Clients of the cost endpoint are loose about JSON types: identity keys
//! arrive as strings or numbers, amounts as numbers or numeric strings, and
//! dates as full timestamps or bare calendar dates. These helpers normalise
//! that input before it reaches the domain.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Deserialize;
use serde_json::json;

use crate::domain::Error;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValidationCode {
    InvalidNumber,
    InvalidTimestamp,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::InvalidNumber => "invalid_number",
            Self::InvalidTimestamp => "invalid_timestamp",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

fn invalid_value(field: FieldName, code: ValidationCode, message: String, value: &str) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "value": value,
        "code": code.as_str(),
    }))
}

/// JSON scalar accepted where the API expects text or a number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// A JSON string.
    Text(String),
    /// A JSON number.
    Number(serde_json::Number),
}

impl Scalar {
    /// Text form; numbers keep their JSON spelling.
    pub(crate) fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
        }
    }
}

/// Read an amount from a number or numeric string.
///
/// An empty string counts as absent so the domain reports it as missing.
pub(crate) fn parse_amount(value: Option<Scalar>, field: FieldName) -> Result<Option<f64>, Error> {
    match value {
        None => Ok(None),
        Some(Scalar::Number(number)) => number.as_f64().map(Some).ok_or_else(|| {
            invalid_value(
                field,
                ValidationCode::InvalidNumber,
                format!("{} must be a number", field.as_str()),
                &number.to_string(),
            )
        }),
        Some(Scalar::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(Scalar::Text(text)) => text.trim().parse::<f64>().map(Some).map_err(|_| {
            invalid_value(
                field,
                ValidationCode::InvalidNumber,
                format!("{} must be a number", field.as_str()),
                &text,
            )
        }),
    }
}

/// Parse an RFC 3339 timestamp or a `YYYY-MM-DD` date (midnight UTC).
pub(crate) fn parse_cost_date(value: &str, field: FieldName) -> Result<DateTime<Utc>, Error> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|_| {
            invalid_value(
                field,
                ValidationCode::InvalidTimestamp,
                format!(
                    "{} must be an RFC 3339 timestamp or a YYYY-MM-DD date",
                    field.as_str()
                ),
                value,
            )
        })
}

/// Optional variant of [`parse_cost_date`]; empty strings count as absent.
pub(crate) fn parse_optional_cost_date(
    value: Option<&str>,
    field: FieldName,
) -> Result<Option<DateTime<Utc>>, Error> {
    value
        .filter(|raw| !raw.is_empty())
        .map(|raw| parse_cost_date(raw, field))
        .transpose()
}
