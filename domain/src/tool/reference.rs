//! Usage-site tool references
//!
//! An agent lists the tools it may call as [`AgentToolReference`]s. A
//! reference names a capability, optionally overrides its description and
//! optionally specializes it through a [`ToolPartial`].

use serde::{Deserialize, Serialize};

use super::partial::ToolPartial;

/// How a reference resolves against the resource store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolReferenceType {
    /// Platform capability; a tool resource of the same name may refine it
    BuiltIn,
    /// Must resolve to a tool resource
    Custom,
}

impl ToolReferenceType {
    pub fn as_str(&self) -> &str {
        match self {
            ToolReferenceType::BuiltIn => "built-in",
            ToolReferenceType::Custom => "custom",
        }
    }
}

impl std::fmt::Display for ToolReferenceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A tool as referenced from an agent's tool list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentToolReference {
    #[serde(rename = "type")]
    pub reference_type: ToolReferenceType,
    /// Name of the underlying capability
    pub name: String,
    /// Description override; wins over the base description when non-empty
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partial: Option<ToolPartial>,
}

impl AgentToolReference {
    pub fn new(reference_type: ToolReferenceType, name: impl Into<String>) -> Self {
        Self {
            reference_type,
            name: name.into(),
            description: String::new(),
            partial: None,
        }
    }

    pub fn built_in(name: impl Into<String>) -> Self {
        Self::new(ToolReferenceType::BuiltIn, name)
    }

    pub fn custom(name: impl Into<String>) -> Self {
        Self::new(ToolReferenceType::Custom, name)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_partial(mut self, partial: ToolPartial) -> Self {
        self.partial = Some(partial);
        self
    }

    /// Name the model will see for this reference
    pub fn advertised_name(&self) -> &str {
        self.partial
            .as_ref()
            .map(|p| p.name.as_str())
            .unwrap_or(&self.name)
    }

    /// Description precedence: non-empty override, else `base` (possibly empty)
    pub fn resolve_description(&self, base: &str) -> String {
        if self.description.is_empty() {
            base.to_string()
        } else {
            self.description.clone()
        }
    }
}
