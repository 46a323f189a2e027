//! Tool resources

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::default_namespace;
use crate::core::error::DomainError;
use crate::tool::entities::{ToolDefinition, empty_object_schema};

/// Execution strategy a tool resource declares
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ToolType {
    /// Implemented by the platform
    Builtin,
    /// Delegates to a team of agents
    Team,
    /// Declared type this subsystem cannot execute
    Unsupported(String),
}

impl ToolType {
    pub fn as_str(&self) -> &str {
        match self {
            ToolType::Builtin => "builtin",
            ToolType::Team => "team",
            ToolType::Unsupported(other) => other,
        }
    }
}

impl From<String> for ToolType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "builtin" | "built-in" => ToolType::Builtin,
            "team" => ToolType::Team,
            _ => ToolType::Unsupported(value),
        }
    }
}

impl From<ToolType> for String {
    fn from(value: ToolType) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for ToolType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reference from a team-typed tool to the team it runs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamToolRef {
    #[serde(default)]
    pub name: String,
}

/// Declared shape of a tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSpec {
    #[serde(rename = "type")]
    pub tool_type: ToolType,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_schema: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<TeamToolRef>,
}

impl ToolSpec {
    pub fn new(tool_type: ToolType) -> Self {
        Self {
            tool_type,
            description: String::new(),
            input_schema: None,
            team: None,
        }
    }

    /// Name of the referenced team, if any and non-empty
    pub fn team_name(&self) -> Option<&str> {
        self.team
            .as_ref()
            .map(|t| t.name.as_str())
            .filter(|name| !name.is_empty())
    }
}

/// A tool as stored in the resource store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResource {
    pub name: String,
    #[serde(default = "default_namespace")]
    pub namespace: String,
    #[serde(flatten)]
    pub spec: ToolSpec,
}

impl ToolResource {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>, spec: ToolSpec) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            spec,
        }
    }

    pub fn builtin(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self::new(name, namespace, ToolSpec::new(ToolType::Builtin))
    }

    pub fn team(
        name: impl Into<String>,
        namespace: impl Into<String>,
        team: impl Into<String>,
    ) -> Self {
        let mut spec = ToolSpec::new(ToolType::Team);
        spec.team = Some(TeamToolRef { name: team.into() });
        Self::new(name, namespace, spec)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.spec.description = description.into();
        self
    }

    pub fn with_input_schema(mut self, schema: Value) -> Self {
        self.spec.input_schema = Some(schema);
        self
    }

    /// Static checks on the declared spec.
    ///
    /// A team-typed tool must name a team; a declared input schema must be
    /// well formed.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.spec.tool_type == ToolType::Team && self.spec.team_name().is_none() {
            return Err(DomainError::MissingTeamName(self.name.clone()));
        }
        if self.spec.input_schema.is_some() {
            self.base_definition().validate_schema()?;
        }
        Ok(())
    }

    /// Definition derived from the resource alone.
    ///
    /// Without a declared schema, team tools take a single string `input`
    /// and other tools take no parameters.
    pub fn base_definition(&self) -> ToolDefinition {
        let parameters = match (&self.spec.input_schema, &self.spec.tool_type) {
            (Some(schema), _) => schema.clone(),
            (None, ToolType::Team) => team_input_schema(),
            (None, _) => empty_object_schema(),
        };
        ToolDefinition {
            name: self.name.clone(),
            description: self.spec.description.clone(),
            parameters,
        }
    }
}

/// Schema advertised by team-typed tools
pub fn team_input_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "input": {
                "type": "string",
                "description": "The message to send to the team"
            }
        },
        "required": ["input"]
    })
}
