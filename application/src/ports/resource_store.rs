//! Resource store port
//!
//! Read-through lookups of declarative tool, team and agent resources.
//! The store behind it (cluster API, files, memory) is an external
//! collaborator; this port lets the registry be tested with a fake.

use async_trait::async_trait;
use thiserror::Error;
use toolbelt_domain::{AgentResource, TeamResource, ToolResource};

/// Kind of resource a lookup was for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Tool,
    Team,
    Agent,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ResourceKind::Tool => "tool",
            ResourceKind::Team => "team",
            ResourceKind::Agent => "agent",
        };
        write!(f, "{}", name)
    }
}

/// Errors returned by resource lookups
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{kind} '{name}' not found in namespace '{namespace}'")]
    NotFound {
        kind: ResourceKind,
        name: String,
        namespace: String,
    },

    #[error("resource store error: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn not_found(kind: ResourceKind, name: &str, namespace: &str) -> Self {
        StoreError::NotFound {
            kind,
            name: name.to_string(),
            namespace: namespace.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// Port for resolving declarative resources by name and namespace
#[async_trait]
pub trait ResourceStore: Send + Sync {
    async fn get_tool(&self, name: &str, namespace: &str) -> Result<ToolResource, StoreError>;

    async fn get_team(&self, name: &str, namespace: &str) -> Result<TeamResource, StoreError>;

    async fn get_agent(&self, name: &str, namespace: &str) -> Result<AgentResource, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = StoreError::not_found(ResourceKind::Team, "research", "default");
        assert_eq!(
            err.to_string(),
            "team 'research' not found in namespace 'default'"
        );
        assert!(err.is_not_found());
        assert!(!StoreError::Backend("down".to_string()).is_not_found());
    }
}
