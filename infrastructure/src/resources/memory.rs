//! In-memory resource store.

use std::collections::HashMap;

use async_trait::async_trait;
use toolbelt_application::{ResourceKind, ResourceStore, StoreError};
use toolbelt_domain::{AgentResource, TeamResource, ToolResource};

type Key = (String, String);

fn key(namespace: &str, name: &str) -> Key {
    (namespace.to_string(), name.to_string())
}

/// Read-only snapshot of declarative resources, keyed by namespace and name.
///
/// Built up front with the `with_*` methods; a later insert under the same
/// key replaces the earlier one.
#[derive(Debug, Clone, Default)]
pub struct InMemoryResourceStore {
    tools: HashMap<Key, ToolResource>,
    teams: HashMap<Key, TeamResource>,
    agents: HashMap<Key, AgentResource>,
}

impl InMemoryResourceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tool(mut self, tool: ToolResource) -> Self {
        self.tools.insert(key(&tool.namespace, &tool.name), tool);
        self
    }

    pub fn with_team(mut self, team: TeamResource) -> Self {
        self.teams.insert(key(&team.namespace, &team.name), team);
        self
    }

    pub fn with_agent(mut self, agent: AgentResource) -> Self {
        self.agents.insert(key(&agent.namespace, &agent.name), agent);
        self
    }

    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }
}

#[async_trait]
impl ResourceStore for InMemoryResourceStore {
    async fn get_tool(&self, name: &str, namespace: &str) -> Result<ToolResource, StoreError> {
        self.tools
            .get(&key(namespace, name))
            .cloned()
            .ok_or_else(|| StoreError::not_found(ResourceKind::Tool, name, namespace))
    }

    async fn get_team(&self, name: &str, namespace: &str) -> Result<TeamResource, StoreError> {
        self.teams
            .get(&key(namespace, name))
            .cloned()
            .ok_or_else(|| StoreError::not_found(ResourceKind::Team, name, namespace))
    }

    async fn get_agent(&self, name: &str, namespace: &str) -> Result<AgentResource, StoreError> {
        self.agents
            .get(&key(namespace, name))
            .cloned()
            .ok_or_else(|| StoreError::not_found(ResourceKind::Agent, name, namespace))
    }
}
