//! Response body decoding and classification.
//!
//! The API answers with JSON text whose expected shape depends on the
//! operation. The functions here turn that text into typed values or a
//! classified [`IgdbError`]:
//!
//! | Body | Records | Count | Fields |
//! |---|---|---|---|
//! | empty / whitespace | `InvalidResponse` | `InvalidResponse` | `InvalidResponse` |
//! | not JSON / wrong shape | `InvalidResponse` | `InvalidResponse` | `InvalidResponse` |
//! | `[]` | `NoResults` | `NoResults` | `Ok(vec![])` |
//! | `{"count": 0}` | n/a | `Ok(0)` | n/a |
//!
//! The count column is intentional: a count endpoint that answers `[]`
//! instead of an object is reported as `NoResults`.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::IgdbError;

#[derive(Deserialize)]
struct CountBody {
    count: u64,
}

/// Decodes an array of records.
///
/// # Errors
///
/// - [`IgdbError::InvalidResponse`] if the body is empty or not an array of `T`
/// - [`IgdbError::NoResults`] if the array is empty
pub fn decode_records<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, IgdbError> {
    let records: Vec<T> = parse(body)?;
    if records.is_empty() {
        return Err(IgdbError::NoResults);
    }
    Ok(records)
}

/// Decodes a `{"count": N}` body.
///
/// # Errors
///
/// - [`IgdbError::InvalidResponse`] if the body is empty or not a count object
/// - [`IgdbError::NoResults`] if the body is an empty array
pub fn decode_count(body: &str) -> Result<u64, IgdbError> {
    let value: Value = parse(body)?;
    if matches!(&value, Value::Array(items) if items.is_empty()) {
        return Err(IgdbError::NoResults);
    }
    let CountBody { count } = serde_json::from_value(value)
        .map_err(|e| IgdbError::invalid_response(format!("expected a count object: {e}")))?;
    Ok(count)
}

/// Decodes an array of field names. An empty array is a valid answer.
///
/// # Errors
///
/// Returns [`IgdbError::InvalidResponse`] if the body is empty or not an
/// array of strings.
pub fn decode_fields(body: &str) -> Result<Vec<String>, IgdbError> {
    parse(body)
}

fn parse<T: DeserializeOwned>(body: &str) -> Result<T, IgdbError> {
    let body = body.trim();
    if body.is_empty() {
        return Err(IgdbError::invalid_response("response body is empty"));
    }
    serde_json::from_str(body).map_err(|e| {
        tracing::debug!(error = %e, "Failed to decode IGDB response");
        IgdbError::invalid_response(e.to_string())
    })
}
