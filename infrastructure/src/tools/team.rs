//! Team-delegation executor
//!
//! Exposes a whole team as one tool taking a single string `input`. A call
//! starts a fresh run of the team: the input becomes the current message
//! and the parent conversation is not threaded through. The answer is the
//! last non-empty assistant message the team produced.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use serde_json::json;
use toolbelt_application::{
    EventRecorder, ExecutionContext, ExecutionError, NoEventRecorder, NoToolRecorder,
    ResourceKind, ResourceStore, TeamOrchestrator, TeamRunError, ToolCallError, ToolEvent,
    ToolExecutor, ToolOutcome, ToolRecorder,
};
use toolbelt_domain::core::string::truncate;
use toolbelt_domain::{
    Message, TeamResource, ToolArguments, ToolCall, ToolResource, ToolResult,
    extract_last_assistant_message_content, prepare_execution_messages,
};
use tracing::{debug, info, warn};

use super::error::RegistryError;

/// Longest input preview written to the event log
const INPUT_PREVIEW_LEN: usize = 200;

/// Executor that delegates a call to a team of agents
pub struct TeamToolExecutor {
    team_name: String,
    namespace: String,
    /// Resolved once at construction
    team: TeamResource,
    orchestrator: Arc<dyn TeamOrchestrator>,
    recorder: Arc<dyn ToolRecorder>,
    events: Arc<dyn EventRecorder>,
}

impl TeamToolExecutor {
    /// Resolve the team named by `tool` and build the executor.
    ///
    /// Fails with "team spec is required" when the tool names no team and
    /// with "failed to get team" when the team cannot be loaded.
    pub async fn create(
        tool: &ToolResource,
        namespace: &str,
        store: &dyn ResourceStore,
        orchestrator: Arc<dyn TeamOrchestrator>,
    ) -> Result<Self, RegistryError> {
        let team_name = tool
            .spec
            .team_name()
            .ok_or_else(|| RegistryError::configuration(&tool.name, "team spec is required"))?;

        let team = store
            .get_team(team_name, namespace)
            .await
            .map_err(|e| RegistryError::lookup(ResourceKind::Team, team_name, e))?;

        debug!(tool = %tool.name, team = %team_name, namespace, "Resolved team for tool");

        Ok(Self {
            team_name: team_name.to_string(),
            namespace: namespace.to_string(),
            team,
            orchestrator,
            recorder: Arc::new(NoToolRecorder),
            events: Arc::new(NoEventRecorder),
        })
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

    pub fn team_name(&self) -> &str {
        &self.team_name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn team(&self) -> &TeamResource {
        &self.team
    }

    async fn delegate(&self, ctx: &ExecutionContext, call: &ToolCall) -> Result<String, ExecutionError> {
        let args = ToolArguments::parse(call)?;
        let input = args.require_str("input")?;

        let child = ctx
            .enter_team(&self.team_name)
            .map_err(|source| ExecutionError::Delegation {
                team: self.team_name.clone(),
                source,
            })?;
        let depth = child.delegation().depth();
        self.recorder.record_team_delegation(&self.team_name, depth);
        self.events.record(ToolEvent::new(
            "team_delegation",
            json!({
                "tool": call.name,
                "call_id": call.id,
                "team": self.team_name,
                "namespace": self.namespace,
                "depth": depth,
                "input": truncate(input, INPUT_PREVIEW_LEN),
            }),
        ));

        // Cannot fail: the input is exactly one message
        let (current, context) = prepare_execution_messages(&[Message::user(input)], &[])
            .map_err(|source| ExecutionError::Delegation {
                team: self.team_name.clone(),
                source,
            })?;

        info!(team = %self.team_name, depth, "Delegating tool call to team");

        let run = self.orchestrator.run_team(&child, &self.team, current, context);
        let result = tokio::select! {
            biased;
            _ = child.cancellation().cancelled() => return Err(ExecutionError::Cancelled),
            result = run => result,
        };
        let messages = result.map_err(|source| match source {
            TeamRunError::Cancelled => ExecutionError::Cancelled,
            source => ExecutionError::TeamRun {
                team: self.team_name.clone(),
                source,
            },
        })?;

        if messages.is_empty() {
            return Err(ExecutionError::EmptyTeamResponse(self.team_name.clone()));
        }

        let content = extract_last_assistant_message_content(&messages);
        if content.is_empty() {
            return Err(ExecutionError::NoAssistantContent(self.team_name.clone()));
        }

        debug!(team = %self.team_name, messages = messages.len(), "Team run completed");
        Ok(content.to_string())
    }
}

#[async_trait]
impl ToolExecutor for TeamToolExecutor {
    async fn execute(&self, ctx: &ExecutionContext, call: &ToolCall) -> ToolOutcome {
        let start = Instant::now();
        let outcome = self.delegate(ctx, call).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        match outcome {
            Ok(content) => Ok(ToolResult::success(call, content).with_duration(duration_ms)),
            Err(e) => {
                warn!(team = %self.team_name, tool = %call.name, error = %e, "Team tool failed");
                Err(ToolCallError::new(call, e).with_duration(duration_ms))
            }
        }
    }
}
