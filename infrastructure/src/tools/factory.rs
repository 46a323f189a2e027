//! Executor factory
//!
//! The one place that maps a declared [`ToolType`] to an executor variant.
//! The registry never inspects tool types itself.

use std::sync::Arc;

use toolbelt_application::{
    EventRecorder, NoEventRecorder, NoToolRecorder, ResourceStore, TeamOrchestrator,
    ToolExecutor, ToolRecorder,
};
use toolbelt_domain::{ToolDefinition, ToolResource, ToolType};

use super::builtin::{BuiltinToolExecutor, builtin_definition};
use super::error::RegistryError;
use super::team::TeamToolExecutor;

/// A tool resource turned into something callable
pub struct ResolvedTool {
    /// Base definition before usage-site overrides
    pub definition: ToolDefinition,
    pub executor: Arc<dyn ToolExecutor>,
    pub tool_type: ToolType,
}

/// Builds executors for tool resources
#[derive(Clone)]
pub struct ExecutorFactory {
    store: Arc<dyn ResourceStore>,
    orchestrator: Arc<dyn TeamOrchestrator>,
    recorder: Arc<dyn ToolRecorder>,
    events: Arc<dyn EventRecorder>,
}

impl ExecutorFactory {
    pub fn new(store: Arc<dyn ResourceStore>, orchestrator: Arc<dyn TeamOrchestrator>) -> Self {
        Self {
            store,
            orchestrator,
            recorder: Arc::new(NoToolRecorder),
            events: Arc::new(NoEventRecorder),
        }
    }

    pub fn with_recorders(
        mut self,
        recorder: Arc<dyn ToolRecorder>,
        events: Arc<dyn EventRecorder>,
    ) -> Self {
        self.recorder = recorder;
        self.events = events;
        self
    }

    pub fn store(&self) -> &Arc<dyn ResourceStore> {
        &self.store
    }

    /// Select and build the executor variant for `tool`.
    pub async fn create_tool_executor(
        &self,
        tool: &ToolResource,
        namespace: &str,
    ) -> Result<ResolvedTool, RegistryError> {
        let executor: Arc<dyn ToolExecutor> = match &tool.spec.tool_type {
            ToolType::Builtin => Arc::new(
                BuiltinToolExecutor::new(&tool.name).ok_or_else(|| {
                    RegistryError::configuration(&tool.name, "unknown builtin tool")
                })?,
            ),
            ToolType::Team => Arc::new(
                TeamToolExecutor::create(
                    tool,
                    namespace,
                    self.store.as_ref(),
                    Arc::clone(&self.orchestrator),
                )
                .await?
                .with_recorders(Arc::clone(&self.recorder), Arc::clone(&self.events)),
            ),
            ToolType::Unsupported(other) => {
                return Err(RegistryError::UnsupportedToolType {
                    tool: tool.name.clone(),
                    tool_type: other.clone(),
                });
            }
        };

        let definition = base_definition(tool);
        definition.validate_schema()?;

        Ok(ResolvedTool {
            definition,
            executor,
            tool_type: tool.spec.tool_type.clone(),
        })
    }

    /// Resolve a builtin with no backing tool resource.
    pub fn builtin_fallback(&self, name: &str) -> Option<ResolvedTool> {
        let definition = builtin_definition(name)?;
        let executor = BuiltinToolExecutor::new(name)?;
        Some(ResolvedTool {
            definition,
            executor: Arc::new(executor),
            tool_type: ToolType::Builtin,
        })
    }
}

/// Resource definition, with catalogue schema and description filling the
/// gaps a builtin resource leaves open.
fn base_definition(tool: &ToolResource) -> ToolDefinition {
    let mut definition = tool.base_definition();
    if tool.spec.tool_type == ToolType::Builtin
        && let Some(catalogue) = builtin_definition(&tool.name)
    {
        if tool.spec.input_schema.is_none() {
            definition.parameters = catalogue.parameters;
        }
        if definition.description.is_empty() {
            definition.description = catalogue.description;
        }
    }
    definition
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::InMemoryResourceStore;
    use crate::teams::StrategyTeamOrchestrator;
    use crate::teams::UnconfiguredAgentRunner;
    use serde_json::json;
    use toolbelt_domain::{TeamMember, TeamResource, ToolSpec};

    fn factory() -> ExecutorFactory {
        let store = Arc::new(InMemoryResourceStore::new().with_team(
            TeamResource::new("writers", "default").with_member(TeamMember::agent("a")),
        ));
        let orchestrator = Arc::new(StrategyTeamOrchestrator::new(
            store.clone(),
            Arc::new(UnconfiguredAgentRunner),
        ));
        ExecutorFactory::new(store, orchestrator)
    }

    #[tokio::test]
    async fn test_builtin_resource_inherits_catalogue() {
        let tool = ToolResource::builtin("terminate", "default");
        let resolved = factory()
            .create_tool_executor(&tool, "default")
            .await
            .unwrap();

        assert_eq!(resolved.tool_type, ToolType::Builtin);
        assert_eq!(resolved.definition.required(), vec!["response"]);
        assert!(!resolved.definition.description.is_empty());
    }

    #[tokio::test]
    async fn test_builtin_resource_schema_wins() {
        let tool = ToolResource::builtin("noop", "default")
            .with_description("Say nothing")
            .with_input_schema(json!({"type": "object", "properties": {}}));
        let resolved = factory()
            .create_tool_executor(&tool, "default")
            .await
            .unwrap();

        assert_eq!(resolved.definition.description, "Say nothing");
        assert!(!resolved.definition.has_parameter("message"));
    }

    #[tokio::test]
    async fn test_unknown_builtin() {
        let tool = ToolResource::builtin("format_disk", "default");
        let err = factory()
            .create_tool_executor(&tool, "default")
            .await
            .err()
            .unwrap();
        assert!(err.to_string().contains("unknown builtin tool"));
    }

    #[tokio::test]
    async fn test_team_tool() {
        let tool = ToolResource::team("ask-writers", "default", "writers");
        let resolved = factory()
            .create_tool_executor(&tool, "default")
            .await
            .unwrap();
        assert_eq!(resolved.tool_type, ToolType::Team);
        assert_eq!(resolved.definition.required(), vec!["input"]);
    }

    #[tokio::test]
    async fn test_unsupported_type() {
        let tool = ToolResource::new(
            "fetch",
            "default",
            ToolSpec::new(ToolType::Unsupported("http".to_string())),
        );
        let err = factory()
            .create_tool_executor(&tool, "default")
            .await
            .err()
            .unwrap();
        assert!(matches!(err, RegistryError::UnsupportedToolType { .. }));
        assert!(err.to_string().contains("unsupported tool type"));
    }

    #[tokio::test]
    async fn test_invalid_schema() {
        let tool = ToolResource::team("ask-writers", "default", "writers").with_input_schema(
            json!({"type": "object", "properties": {}, "required": ["input"]}),
        );
        let err = factory()
            .create_tool_executor(&tool, "default")
            .await
            .err()
            .unwrap();
        assert!(matches!(err, RegistryError::Definition(_)));
    }

    #[test]
    fn test_builtin_fallback() {
        assert!(factory().builtin_fallback("get_current_time").is_some());
        assert!(factory().builtin_fallback("missing").is_none());
    }
}
