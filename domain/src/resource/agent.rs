//! Agent resources

use serde::{Deserialize, Serialize};

use super::default_namespace;
use crate::tool::reference::AgentToolReference;

/// An agent: a prompt plus the tools it may call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentResource {
    pub name: String,
    #[serde(default = "default_namespace")]
    pub namespace: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub prompt: String,
    /// Tool references, in the order they are advertised
    #[serde(default)]
    pub tools: Vec<AgentToolReference>,
}

impl AgentResource {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            description: String::new(),
            prompt: String::new(),
            tools: Vec::new(),
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_tool(mut self, reference: AgentToolReference) -> Self {
        self.tools.push(reference);
        self
    }
}
