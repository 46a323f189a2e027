//! Tool Registry
//!
//! The [`ToolRegistry`] resolves an agent's tool references into executors
//! and implements [`ToolExecutorPort`]. It is built once per execution
//! context and is read-only afterwards, so dispatch needs no locking.
//!
//! # Usage
//!
//! ```ignore
//! use toolbelt_infrastructure::tools::{ExecutorFactory, ToolRegistry};
//!
//! let mut registry = ToolRegistry::new(ExecutorFactory::new(store, orchestrator));
//! registry.register_agent("researcher", "default").await?;
//!
//! // Definitions in registration order
//! let tools = registry.tool_definitions();
//!
//! // Dispatch by advertised name
//! let outcome = registry.execute(&ctx, &call).await;
//! ```
//!
//! # Resolution
//!
//! For each [`AgentToolReference`]:
//!
//! 1. The tool resource named by the reference is looked up; a `built-in`
//!    reference without a resource falls back to the builtin catalogue. If
//!    nothing matches and the reference carries a partial, the partial's
//!    name is resolved the same way
//! 2. The [`ExecutorFactory`] selects the executor variant
//! 3. A non-empty reference description replaces the base description
//! 4. A partial binding renames the definition, strips bound parameters
//!    and wraps the executor in a [`PartialToolExecutor`]

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use serde_json::json;
use toolbelt_application::{
    EventRecorder, ExecutionContext, ExecutionError, NoEventRecorder, NoToolRecorder,
    ResourceKind, ToolCallError, ToolEvent, ToolExecutor, ToolExecutorPort, ToolOutcome,
    ToolRecorder,
};
use toolbelt_domain::{
    AgentResource, AgentToolReference, ToolCall, ToolDefinition, ToolReferenceType,
    create_partial_tool_definition,
};

use super::error::RegistryError;
use super::factory::{ExecutorFactory, ResolvedTool};
use super::partial::PartialToolExecutor;

/// Resolved, callable tool set for one execution context
pub struct ToolRegistry {
    factory: ExecutorFactory,
    /// Published definitions, in registration order
    definitions: Vec<ToolDefinition>,
    /// Advertised name -> executor
    executors: HashMap<String, Arc<dyn ToolExecutor>>,
    recorder: Arc<dyn ToolRecorder>,
    events: Arc<dyn EventRecorder>,
}

impl ToolRegistry {
    /// Create an empty registry
    pub fn new(factory: ExecutorFactory) -> Self {
        Self {
            factory,
            definitions: Vec::new(),
            executors: HashMap::new(),
            recorder: Arc::new(NoToolRecorder),
            events: Arc::new(NoEventRecorder),
        }
    }

    /// Attach recorders; team executors built afterwards report to them too
    pub fn with_recorders(
        mut self,
        recorder: Arc<dyn ToolRecorder>,
        events: Arc<dyn EventRecorder>,
    ) -> Self {
        self.factory = self
            .factory
            .with_recorders(Arc::clone(&recorder), Arc::clone(&events));
        self.recorder = recorder;
        self.events = events;
        self
    }

    /// Build a registry holding every tool of `agent`
    pub async fn for_agent(
        factory: ExecutorFactory,
        agent: &str,
        namespace: &str,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::new(factory);
        registry.register_agent(agent, namespace).await?;
        Ok(registry)
    }

    /// Register every tool reference of `agent`, in list order
    pub async fn register_agent(
        &mut self,
        agent: &str,
        namespace: &str,
    ) -> Result<AgentResource, RegistryError> {
        let resource = self
            .factory
            .store()
            .get_agent(agent, namespace)
            .await
            .map_err(|e| RegistryError::lookup(ResourceKind::Agent, agent, e))?;

        for reference in &resource.tools {
            self.register_tool(reference, namespace).await?;
        }

        tracing::debug!(
            agent = %agent,
            namespace = %namespace,
            tools = self.definitions.len(),
            "Registered agent tools"
        );
        Ok(resource)
    }

    /// Resolve `reference` and publish it
    pub async fn register_tool(
        &mut self,
        reference: &AgentToolReference,
        namespace: &str,
    ) -> Result<(), RegistryError> {
        let advertised = reference.advertised_name();
        if self.executors.contains_key(advertised) {
            return Err(RegistryError::DuplicateTool(advertised.to_string()));
        }

        let ResolvedTool {
            mut definition,
            executor,
            tool_type,
        } = self.resolve(reference, namespace).await?;

        definition.description = reference.resolve_description(&definition.description);

        let (definition, executor) = match &reference.partial {
            Some(partial) => (
                create_partial_tool_definition(&definition, partial)?,
                Arc::new(PartialToolExecutor::new(executor, partial)) as Arc<dyn ToolExecutor>,
            ),
            None => (definition, executor),
        };

        tracing::debug!(
            tool = %definition.name,
            source = %reference.name,
            tool_type = %tool_type,
            "Registered tool"
        );
        self.recorder
            .record_tool_registered(&definition.name, tool_type.as_str());
        self.events.record(ToolEvent::new(
            "tool_registered",
            json!({
                "tool": definition.name,
                "source": reference.name,
                "type": tool_type.as_str(),
                "namespace": namespace,
            }),
        ));

        self.executors.insert(definition.name.clone(), executor);
        self.definitions.push(definition);
        Ok(())
    }

    async fn resolve(
        &self,
        reference: &AgentToolReference,
        namespace: &str,
    ) -> Result<ResolvedTool, RegistryError> {
        let missing = match self
            .resolve_name(&reference.name, reference.reference_type, namespace)
            .await
        {
            Err(e) if is_missing_tool(&e) => e,
            resolved => return resolved,
        };

        // A partial may name the underlying tool itself
        let Some(partial) = reference
            .partial
            .as_ref()
            .filter(|p| p.name != reference.name)
        else {
            return Err(missing);
        };

        tracing::debug!(
            reference = %reference.name,
            partial = %partial.name,
            "Tool not found by reference name, resolving partial name"
        );
        match self
            .resolve_name(&partial.name, reference.reference_type, namespace)
            .await
        {
            Err(e) if is_missing_tool(&e) => Err(missing),
            resolved => resolved,
        }
    }

    async fn resolve_name(
        &self,
        name: &str,
        reference_type: ToolReferenceType,
        namespace: &str,
    ) -> Result<ResolvedTool, RegistryError> {
        match self.factory.store().get_tool(name, namespace).await {
            Ok(tool) => self.factory.create_tool_executor(&tool, namespace).await,
            Err(e) if e.is_not_found() && reference_type == ToolReferenceType::BuiltIn => self
                .factory
                .builtin_fallback(name)
                .ok_or_else(|| RegistryError::lookup(ResourceKind::Tool, name, e)),
            Err(e) => Err(RegistryError::lookup(ResourceKind::Tool, name, e)),
        }
    }

    /// Number of published tools
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

fn is_missing_tool(error: &RegistryError) -> bool {
    matches!(
        error,
        RegistryError::NotFound {
            kind: ResourceKind::Tool,
            ..
        }
    )
}

#[async_trait]
impl ToolExecutorPort for ToolRegistry {
    fn tool_definitions(&self) -> &[ToolDefinition] {
        &self.definitions
    }

    async fn execute(&self, ctx: &ExecutionContext, call: &ToolCall) -> ToolOutcome {
        let Some(executor) = self.executors.get(&call.name) else {
            tracing::warn!(tool = %call.name, call_id = %call.id, "Tool not found");
            return Err(ToolCallError::new(
                call,
                ExecutionError::ToolNotFound(call.name.clone()),
            ));
        };

        let start = Instant::now();
        let outcome = executor.execute(ctx, call).await;
        let elapsed = start.elapsed();

        let success = outcome.is_ok();
        match &outcome {
            Ok(_) => tracing::debug!(tool = %call.name, call_id = %call.id, ?elapsed, "Tool executed"),
            Err(e) => tracing::warn!(
                tool = %call.name,
                call_id = %call.id,
                error = %e,
                "Tool execution failed"
            ),
        }
        self.recorder
            .record_tool_executed(&call.name, success, elapsed);
        self.events.record(ToolEvent::new(
            "tool_executed",
            json!({
                "tool": call.name,
                "call_id": call.id,
                "success": success,
                "duration_ms": elapsed.as_millis() as u64,
            }),
        ));

        outcome
    }
}
