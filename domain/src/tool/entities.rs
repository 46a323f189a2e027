//! Tool domain entities

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::core::error::DomainError;

/// Model-facing description of a callable capability.
///
/// `parameters` is a JSON-schema shaped object: `properties` maps a parameter
/// name to its schema fragment and `required` lists mandatory names.
/// Definitions are values: specialization builds a new definition and never
/// edits a published one in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Advertised name, unique within one registry
    pub name: String,
    /// Human/model readable description (may be empty)
    #[serde(default)]
    pub description: String,
    /// JSON-schema shaped parameter description
    #[serde(default = "empty_object_schema")]
    pub parameters: Value,
}

/// Schema of a tool that takes no parameters
pub fn empty_object_schema() -> Value {
    json!({
        "type": "object",
        "properties": {}
    })
}

impl ToolDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: empty_object_schema(),
        }
    }

    pub fn with_parameters(mut self, parameters: Value) -> Self {
        self.parameters = parameters;
        self
    }

    /// Add a single property to the schema (builder pattern)
    pub fn with_property(mut self, name: impl Into<String>, schema: Value, required: bool) -> Self {
        let name = name.into();
        if !self.parameters.is_object() {
            self.parameters = empty_object_schema();
        }
        if let Some(root) = self.parameters.as_object_mut() {
            let properties = root
                .entry("properties")
                .or_insert_with(|| Value::Object(Map::new()));
            if let Some(properties) = properties.as_object_mut() {
                properties.insert(name.clone(), schema);
            }
            if required {
                let list = root
                    .entry("required")
                    .or_insert_with(|| Value::Array(Vec::new()));
                if let Some(list) = list.as_array_mut() {
                    list.push(Value::String(name));
                }
            }
        }
        self
    }

    /// The `properties` map of the schema, if present
    pub fn properties(&self) -> Option<&Map<String, Value>> {
        self.parameters.get("properties").and_then(Value::as_object)
    }

    /// Names listed in `required` (non-string entries are skipped)
    pub fn required(&self) -> Vec<&str> {
        self.parameters
            .get("required")
            .and_then(Value::as_array)
            .map(|list| list.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    pub fn has_parameter(&self, name: &str) -> bool {
        self.properties().is_some_and(|p| p.contains_key(name))
    }

    /// Check the schema shape: an object whose `required` names all appear
    /// in `properties`
    pub fn validate_schema(&self) -> Result<(), DomainError> {
        let invalid = |reason: String| DomainError::InvalidSchema {
            tool: self.name.clone(),
            reason,
        };

        let root = self
            .parameters
            .as_object()
            .ok_or_else(|| invalid("parameters must be a JSON object".to_string()))?;

        if let Some(properties) = root.get("properties")
            && !properties.is_object()
        {
            return Err(invalid("properties must be a JSON object".to_string()));
        }

        if let Some(required) = root.get("required") {
            let list = required
                .as_array()
                .ok_or_else(|| invalid("required must be an array".to_string()))?;
            for entry in list {
                let name = entry
                    .as_str()
                    .ok_or_else(|| invalid("required entries must be strings".to_string()))?;
                if !self.has_parameter(name) {
                    return Err(invalid(format!(
                        "required parameter '{}' is not declared in properties",
                        name
                    )));
                }
            }
        }

        Ok(())
    }
}

/// A single invocation request emitted by the reasoning loop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Correlates the request with its result
    pub id: String,
    /// Advertised (post-specialization) tool name
    pub name: String,
    /// JSON-encoded argument object, passed through opaquely
    #[serde(default)]
    pub arguments: String,
}

impl ToolCall {
    pub fn new(id: impl Into<String>, name: impl Into<String>, arguments: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            arguments: arguments.into(),
        }
    }

    /// Build a call from an already structured argument value
    pub fn with_json(id: impl Into<String>, name: impl Into<String>, arguments: &Value) -> Self {
        Self::new(id, name, arguments.to_string())
    }

    /// Same call re-encoded with different arguments
    pub fn with_arguments(&self, arguments: &Map<String, Value>) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            arguments: Value::Object(arguments.clone()).to_string(),
        }
    }
}
