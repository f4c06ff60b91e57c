//! Loose conversion of JSON request values into column types.
//!
//! Request bodies are not type-checked by the handlers. Values are coerced
//! the way Postgres coerces literals on assignment: numbers and booleans are
//! accepted by text columns, numeric strings by integer columns, and
//! ISO-8601 strings by timestamp columns. Anything else is reported as
//! [`AppError::InvalidValue`], which is served as an unhandled error.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::{Map, Value};

use crate::error::AppError;

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Presence check used by the create endpoints.
///
/// `null`, `false`, zero, empty strings and empty collections count as missing.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Returns the field if it is present and truthy.
pub fn required<'a>(body: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    body.get(field).filter(|v| is_truthy(v))
}

/// Unwraps a request body that must be a JSON object.
pub fn into_object(body: Value) -> Result<Map<String, Value>, AppError> {
    match body {
        Value::Object(map) => Ok(map),
        _ => Err(AppError::NotAnObject),
    }
}

pub fn to_text(field: &str, value: &Value) -> Result<String, AppError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Err(AppError::invalid_value(field, "null in a NOT NULL column")),
        Value::Array(_) | Value::Object(_) => {
            Err(AppError::invalid_value(field, "cannot store a JSON collection as text"))
        }
    }
}

pub fn to_integer(field: &str, value: &Value) -> Result<i32, AppError> {
    let parsed = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    parsed
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| AppError::invalid_value(field, format!("not an integer: {value}")))
}

pub fn to_timestamp(field: &str, value: &Value) -> Result<NaiveDateTime, AppError> {
    let Value::String(raw) = value else {
        return Err(AppError::invalid_value(
            field,
            format!("not a timestamp: {value}"),
        ));
    };
    let raw = raw.trim();

    // Postgres drops the offset when assigning to `timestamp without time zone`.
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Ok(with_offset.naive_local());
    }

    for format in NAIVE_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(ts);
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| AppError::invalid_value(field, format!("not a timestamp: {raw}")))
}
