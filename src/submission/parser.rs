use serde_json::{Map, Value};

use crate::error::SubmitError;
use crate::models::ContactForm;

/// Parse a request body as a JSON object. An empty body is an empty object.
///
/// A body that is present but not a JSON object (invalid JSON, or a JSON
/// array, number, string, bool or `null`) is reported as an internal error,
/// not a validation error.
pub fn parse_body(body: &[u8]) -> Result<Value, SubmitError> {
    if body.is_empty() {
        return Ok(Value::Object(Map::new()));
    }
    let value: Value = serde_json::from_slice(body)?;
    if !value.is_object() {
        return Err(SubmitError::Internal("body is not a JSON object".to_string()));
    }
    Ok(value)
}

/// Check the parsed body against the contact form schema.
///
/// `name`, `email` and `message` must all be present. Their values are not
/// inspected, extra keys are dropped.
pub fn extract_form(value: Value) -> Result<ContactForm, SubmitError> {
    serde_json::from_value(value).map_err(|e| SubmitError::Validation(e.to_string()))
}

