//! Decoding of tool input that may arrive as an object or as JSON text.
//!
//! Some agents can only emit strings for tool arguments, so every meta-tool
//! accepts `{"query": "..."}` as well as `"{\"query\": \"...\"}"`.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::types::{ToolError, ToolResult};

/// Returns the input as a JSON object, parsing it first when it is a string.
pub fn decode_input(input: Value) -> ToolResult<Value> {
    match input {
        Value::Object(_) => Ok(input),
        Value::String(text) => match serde_json::from_str::<Value>(&text) {
            Ok(value @ Value::Object(_)) => Ok(value),
            Ok(other) => Err(ToolError::invalid_input(format!(
                "expected a JSON object, got {}",
                value_kind(&other)
            ))),
            Err(e) => Err(ToolError::invalid_input(format!(
                "input string is not valid JSON: {}",
                e
            ))),
        },
        other => Err(ToolError::invalid_input(format!(
            "expected an object or JSON string, got {}",
            value_kind(&other)
        ))),
    }
}

/// Decodes the input and deserializes it into `T`.
pub fn parse_input<T: DeserializeOwned>(input: Value) -> ToolResult<T> {
    let value = decode_input(input)?;
    serde_json::from_value(value).map_err(|e| ToolError::invalid_input(e.to_string()))
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ToolErrorKind;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Query {
        query: String,
    }

    #[test]
    fn test_object_passes_through() {
        let value = decode_input(json!({"query": "employees"})).unwrap();
        assert_eq!(value["query"], "employees");
    }

    #[test]
    fn test_string_is_parsed() {
        let parsed: Query = parse_input(json!(r#"{"query": "employees"}"#)).unwrap();
        assert_eq!(parsed.query, "employees");
    }

    #[test]
    fn test_rejects_non_object_values() {
        for input in [json!(42), json!(null), json!([1, 2]), json!("\"text\"")] {
            let err = decode_input(input).unwrap_err();
            assert_eq!(err.kind(), ToolErrorKind::InvalidInput);
        }
    }

    #[test]
    fn test_rejects_malformed_json_string() {
        let err = decode_input(json!("{query:")).unwrap_err();
        assert!(err.contains("not valid JSON"));
    }

    #[test]
    fn test_missing_required_field() {
        let err = parse_input::<Query>(json!({"limit": 3})).unwrap_err();
        assert_eq!(err.kind(), ToolErrorKind::InvalidInput);
        assert!(err.contains("query"));
    }
}
