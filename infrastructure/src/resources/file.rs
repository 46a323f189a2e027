//! TOML resource files
//!
//! A resource file declares tools, teams and agents as arrays of tables:
//!
//! ```toml
//! [[tools]]
//! name = "ask-writers"
//! type = "team"
//! description = "Ask the writing team"
//! team = { name = "writers" }
//!
//! [[teams]]
//! name = "writers"
//! strategy = "sequential"
//! members = [{ name = "drafter" }, { name = "editor" }]
//!
//! [[agents]]
//! name = "assistant"
//! tools = [{ type = "built-in", name = "get_current_time" }]
//! ```
//!
//! Entries without a `namespace` land in `default`.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use toolbelt_domain::{AgentResource, DomainError, TeamResource, ToolResource};
use tracing::debug;

use super::memory::InMemoryResourceStore;

#[derive(Error, Debug)]
pub enum ResourceFileError {
    #[error("failed to read resource file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse resource file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid tool '{tool}': {source}")]
    InvalidTool {
        tool: String,
        #[source]
        source: DomainError,
    },
}

/// Contents of one resource file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceFile {
    #[serde(default)]
    pub tools: Vec<ToolResource>,
    #[serde(default)]
    pub teams: Vec<TeamResource>,
    #[serde(default)]
    pub agents: Vec<AgentResource>,
}

impl ResourceFile {
    pub fn parse(content: &str) -> Result<Self, ResourceFileError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ResourceFileError> {
        let content = std::fs::read_to_string(path).map_err(|source| ResourceFileError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let file = Self::parse(&content)?;
        debug!(
            path = %path.display(),
            tools = file.tools.len(),
            teams = file.teams.len(),
            agents = file.agents.len(),
            "Loaded resource file"
        );
        Ok(file)
    }

    /// Static checks on every declared tool
    pub fn validate(&self) -> Result<(), ResourceFileError> {
        for tool in &self.tools {
            tool.validate()
                .map_err(|source| ResourceFileError::InvalidTool {
                    tool: tool.name.clone(),
                    source,
                })?;
        }
        Ok(())
    }

    /// Validate and turn into a store snapshot
    pub fn into_store(self) -> Result<InMemoryResourceStore, ResourceFileError> {
        self.validate()?;
        let store = self
            .tools
            .into_iter()
            .fold(InMemoryResourceStore::new(), |store, tool| store.with_tool(tool));
        let store = self
            .teams
            .into_iter()
            .fold(store, |store, team| store.with_team(team));
        Ok(self
            .agents
            .into_iter()
            .fold(store, |store, agent| store.with_agent(agent)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use toolbelt_application::ResourceStore;
    use toolbelt_domain::{TeamStrategy, ToolReferenceType, ToolType};

    const SAMPLE: &str = r#"
[[tools]]
name = "ask-writers"
type = "team"
description = "Ask the writing team"
team = { name = "writers" }

[[tools]]
name = "noop"
namespace = "ops"
type = "builtin"

[[teams]]
name = "writers"
strategy = "round-robin"
max_turns = 4
members = [{ name = "drafter" }, { name = "editor" }]

[[agents]]
name = "assistant"
prompt = "You are helpful."

[[agents.tools]]
type = "built-in"
name = "get_current_time"

[[agents.tools]]
type = "custom"
name = "ask-writers"
description = "Delegate writing"

[agents.tools.partial]
name = "ask-writers-briefly"
parameters = []
"#;

    #[test]
    fn test_parse_sample() {
        let file = ResourceFile::parse(SAMPLE).unwrap();

        assert_eq!(file.tools.len(), 2);
        assert_eq!(file.tools[0].spec.tool_type, ToolType::Team);
        assert_eq!(file.tools[0].spec.team_name(), Some("writers"));
        assert_eq!(file.tools[1].namespace, "ops");

        assert_eq!(file.teams[0].strategy, TeamStrategy::RoundRobin);
        assert_eq!(file.teams[0].members[1].member_type, "agent");

        let agent = &file.agents[0];
        assert_eq!(agent.tools[0].reference_type, ToolReferenceType::BuiltIn);
        assert_eq!(agent.tools[1].advertised_name(), "ask-writers-briefly");
        assert_eq!(agent.tools[1].description, "Delegate writing");
    }

    #[test]
    fn test_validate_rejects_team_tool_without_team() {
        let file = ResourceFile::parse(
            r#"
[[tools]]
name = "ask"
type = "team"
"#,
        )
        .unwrap();
        let err = file.into_store().unwrap_err();
        assert!(err.to_string().contains("team field is required"));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            ResourceFile::parse("[[tools]\nname ="),
            Err(ResourceFileError::Parse(_))
        ));
    }

    #[tokio::test]
    async fn test_load_into_store() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let store = ResourceFile::load(file.path())
            .unwrap()
            .into_store()
            .unwrap();

        assert_eq!(store.tool_count(), 2);
        assert!(store.get_tool("noop", "ops").await.is_ok());
        assert!(store.get_team("writers", "default").await.is_ok());
        assert_eq!(
            store.get_agent("assistant", "default").await.unwrap().tools.len(),
            2
        );
    }

    #[test]
    fn test_load_missing_file() {
        let err = ResourceFile::load(Path::new("/nonexistent/resources.toml")).unwrap_err();
        assert!(matches!(err, ResourceFileError::Io { .. }));
    }
}
