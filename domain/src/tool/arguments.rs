//! Parsed tool-call arguments
//!
//! Every executor reads its arguments through [`ToolArguments`] so that
//! malformed calls are classified the same way everywhere: the
//! [`ArgumentError`] carries full detail, [`ArgumentError::model_message`]
//! the short text the model sees.

use serde_json::{Map, Value};
use thiserror::Error;

use super::entities::ToolCall;

/// Call-shape error: the model produced arguments we cannot use
#[derive(Debug, Error)]
pub enum ArgumentError {
    #[error("failed to parse tool arguments: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{0} parameter is required")]
    Missing(String),

    #[error("{0} parameter must be a string")]
    NotAString(String),
}

impl ArgumentError {
    /// Short message for [`ToolResult::error`](super::ToolResult::error)
    pub fn model_message(&self) -> String {
        match self {
            ArgumentError::Parse(_) => "Failed to parse tool arguments".to_string(),
            other => other.to_string(),
        }
    }
}

/// JSON object arguments of a [`ToolCall`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolArguments(Map<String, Value>);

impl ToolArguments {
    /// Parse the call's JSON-encoded arguments; anything but an object fails
    pub fn parse(call: &ToolCall) -> Result<Self, ArgumentError> {
        let map: Map<String, Value> = serde_json::from_str(&call.arguments)?;
        Ok(Self(map))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Required string argument
    pub fn require_str(&self, key: &str) -> Result<&str, ArgumentError> {
        match self.0.get(key) {
            None => Err(ArgumentError::Missing(key.to_string())),
            Some(value) => value
                .as_str()
                .ok_or_else(|| ArgumentError::NotAString(key.to_string())),
        }
    }

    /// Optional string argument; present but mistyped is still an error
    pub fn optional_str(&self, key: &str) -> Result<Option<&str>, ArgumentError> {
        match self.0.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => value
                .as_str()
                .map(Some)
                .ok_or_else(|| ArgumentError::NotAString(key.to_string())),
        }
    }

    /// Overlay `bound` on top of these arguments; bound values win
    pub fn merged_with(&self, bound: &Map<String, Value>) -> Self {
        let mut merged = self.0.clone();
        for (key, value) in bound {
            merged.insert(key.clone(), value.clone());
        }
        Self(merged)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn call(arguments: &str) -> ToolCall {
        ToolCall::new("id", "tool", arguments)
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = ToolArguments::parse(&call("invalid json{")).unwrap_err();
        assert!(matches!(err, ArgumentError::Parse(_)));
        assert_eq!(err.model_message(), "Failed to parse tool arguments");
        assert!(err.to_string().starts_with("failed to parse tool arguments"));
    }

    #[test]
    fn test_parse_rejects_non_object() {
        assert!(ToolArguments::parse(&call("[1, 2]")).is_err());
        assert!(ToolArguments::parse(&call("")).is_err());
    }

    #[test]
    fn test_require_str() {
        let args = ToolArguments::parse(&call(r#"{"input": "hi", "count": 3}"#)).unwrap();

        assert_eq!(args.require_str("input").unwrap(), "hi");

        let missing = args.require_str("query").unwrap_err();
        assert_eq!(missing.model_message(), "query parameter is required");

        let mistyped = args.require_str("count").unwrap_err();
        assert_eq!(mistyped.model_message(), "count parameter must be a string");
    }

    #[test]
    fn test_optional_str() {
        let args = ToolArguments::parse(&call(r#"{"a": "x", "b": null, "c": 1}"#)).unwrap();
        assert_eq!(args.optional_str("a").unwrap(), Some("x"));
        assert_eq!(args.optional_str("b").unwrap(), None);
        assert_eq!(args.optional_str("missing").unwrap(), None);
        assert!(args.optional_str("c").is_err());
    }

    #[test]
    fn test_merged_with_bound_values_win() {
        let args = ToolArguments::parse(&call(r#"{"city": "Oslo", "units": "imperial"}"#)).unwrap();
        let mut bound = Map::new();
        bound.insert("units".to_string(), json!("metric"));

        let merged = args.merged_with(&bound);
        assert_eq!(merged.get("city"), Some(&json!("Oslo")));
        assert_eq!(merged.get("units"), Some(&json!("metric")));
    }
}
