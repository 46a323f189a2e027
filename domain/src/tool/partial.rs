//! Partial specialization of tool definitions
//!
//! A [`ToolPartial`] binds a subset of a tool's parameters for one usage
//! site and advertises the result under its own name. Bound parameters
//! disappear from the advertised schema; their values are injected into the
//! call arguments at execution time and are never shown to the model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::entities::ToolDefinition;
use crate::core::error::DomainError;

/// One bound parameter of a [`ToolPartial`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartialParameter {
    pub name: String,
    pub value: Value,
}

/// Partial-binding spec attached to an agent's tool reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolPartial {
    /// Name the specialized definition advertises
    pub name: String,
    /// Bound parameters, in declaration order
    #[serde(default)]
    pub parameters: Vec<PartialParameter>,
}

impl ToolPartial {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
        }
    }

    pub fn bind(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.push(PartialParameter {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Bound values as an argument overlay
    pub fn bound_arguments(&self) -> Map<String, Value> {
        self.parameters
            .iter()
            .map(|p| (p.name.clone(), p.value.clone()))
            .collect()
    }
}

/// Build the specialized definition for `partial` from `base`.
///
/// The result carries the partial's name and the base description verbatim
/// (description overrides happen at the registry, not here). Every bound
/// parameter is removed from `properties` and `required`; everything else in
/// the schema is preserved. `base` is left untouched.
pub fn create_partial_tool_definition(
    base: &ToolDefinition,
    partial: &ToolPartial,
) -> Result<ToolDefinition, DomainError> {
    if let Some(missing) = partial
        .parameters
        .iter()
        .find(|p| !base.has_parameter(&p.name))
    {
        return Err(DomainError::UnknownPartialParameter {
            tool: base.name.clone(),
            parameter: missing.name.clone(),
        });
    }

    let mut parameters = base.parameters.clone();
    if let Some(root) = parameters.as_object_mut() {
        if let Some(properties) = root.get_mut("properties").and_then(Value::as_object_mut) {
            for bound in &partial.parameters {
                properties.remove(&bound.name);
            }
        }
        if let Some(required) = root.get_mut("required").and_then(Value::as_array_mut) {
            required.retain(|entry| {
                entry
                    .as_str()
                    .is_none_or(|name| !partial.parameters.iter().any(|p| p.name == name))
            });
        }
    }

    Ok(ToolDefinition {
        name: partial.name.clone(),
        description: base.description.clone(),
        parameters,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn weather() -> ToolDefinition {
        ToolDefinition::new("original-tool", "Original tool description").with_parameters(json!({
            "type": "object",
            "properties": {
                "city": {"type": "string", "description": "City name"},
                "units": {"type": "string", "description": "Temperature units"},
                "days": {"type": "integer"}
            },
            "required": ["city", "units"],
            "additionalProperties": false
        }))
    }

    #[test]
    fn test_partial_renames_and_preserves_description() {
        let partial = ToolPartial::new("weather-forecast").bind("units", "metric");

        let result = create_partial_tool_definition(&weather(), &partial).unwrap();

        assert_eq!(result.name, "weather-forecast");
        assert_eq!(result.description, "Original tool description");
    }

    #[test]
    fn test_partial_removes_bound_parameters_only() {
        let partial = ToolPartial::new("weather-forecast").bind("units", "metric");

        let result = create_partial_tool_definition(&weather(), &partial).unwrap();

        assert!(!result.has_parameter("units"));
        assert!(!result.required().contains(&"units"));
        assert!(result.has_parameter("city"));
        assert!(result.has_parameter("days"));
        assert_eq!(result.required(), vec!["city"]);
        assert_eq!(
            result.properties().unwrap()["city"],
            json!({"type": "string", "description": "City name"})
        );
        assert_eq!(result.parameters["additionalProperties"], json!(false));
    }

    #[test]
    fn test_partial_does_not_touch_base() {
        let base = weather();
        let partial = ToolPartial::new("a").bind("units", "metric").bind("city", "Paris");

        let result = create_partial_tool_definition(&base, &partial).unwrap();

        assert!(result.required().is_empty());
        assert_eq!(base, weather());
    }

    #[test]
    fn test_partial_with_unknown_parameter_fails() {
        let partial = ToolPartial::new("a").bind("country", "NO");

        let err = create_partial_tool_definition(&weather(), &partial).unwrap_err();
        assert_eq!(
            err,
            DomainError::UnknownPartialParameter {
                tool: "original-tool".to_string(),
                parameter: "country".to_string(),
            }
        );
    }

    #[test]
    fn test_partial_without_bindings_only_renames() {
        let partial = ToolPartial::new("renamed");

        let result = create_partial_tool_definition(&weather(), &partial).unwrap();
        assert_eq!(result.name, "renamed");
        assert_eq!(result.parameters, weather().parameters);
    }

    #[test]
    fn test_bound_arguments() {
        let partial = ToolPartial::new("a").bind("units", "metric").bind("days", 3);
        let bound = partial.bound_arguments();
        assert_eq!(bound["units"], json!("metric"));
        assert_eq!(bound["days"], json!(3));
    }
}
