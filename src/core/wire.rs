use serde_json::Value;

use crate::core::FmpError;

/// Top-level shape of an FMP response body.
///
/// Both endpoints answer with a JSON array on success. Authentication and quota problems
/// come back as an object carrying an `Error Message` field instead.
#[derive(Debug)]
pub(crate) enum Payload {
    Rows(Vec<Value>),
    ApiError(String),
    Unexpected(&'static str),
}

pub(crate) fn parse_payload(body: &str) -> Result<Payload, FmpError> {
    let value: Value = serde_json::from_str(body)?;
    Ok(match value {
        Value::Array(rows) => Payload::Rows(rows),
        Value::Null => Payload::Rows(Vec::new()),
        Value::Object(map) => match map.get("Error Message") {
            Some(msg) => Payload::ApiError(
                msg.as_str()
                    .map_or_else(|| msg.to_string(), str::to_string),
            ),
            None => Payload::Unexpected("object"),
        },
        Value::String(_) => Payload::Unexpected("string"),
        Value::Number(_) => Payload::Unexpected("number"),
        Value::Bool(_) => Payload::Unexpected("bool"),
    })
}
