//! Tool Executor ports
//!
//! Two levels of execution share one contract:
//!
//! - [`ToolExecutor`]: a handler for one capability (builtin, team, ...)
//! - [`ToolExecutorPort`]: the dispatch point the reasoning loop calls,
//!   routing a [`ToolCall`] to the executor registered under its name
//!
//! Both return a [`ToolOutcome`]. A failed call is a [`ToolCallError`] that
//! carries the model-facing [`ToolResult`] (short error, echoed id and name)
//! together with the full diagnostic [`ExecutionError`], so callers always
//! get both.

use async_trait::async_trait;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use toolbelt_domain::{
    ArgumentError, DelegationChain, DomainError, ToolCall, ToolDefinition, ToolResult,
};

use super::team_orchestrator::TeamRunError;
use crate::config::ExecutionParams;

/// Per-call execution context
///
/// Carries the cancellation token, the active delegation chain and the
/// execution limits into every executor, including nested team runs.
#[derive(Debug, Clone, Default)]
pub struct ExecutionContext {
    cancellation: CancellationToken,
    delegation: DelegationChain,
    params: ExecutionParams,
}

impl ExecutionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    pub fn with_params(mut self, params: ExecutionParams) -> Self {
        self.params = params;
        self
    }

    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancellation
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }

    pub fn delegation(&self) -> &DelegationChain {
        &self.delegation
    }

    pub fn params(&self) -> &ExecutionParams {
        &self.params
    }

    /// Context for a nested run of `team`.
    ///
    /// The child token is cancelled with its parent, never the other way
    /// round.
    pub fn enter_team(&self, team: &str) -> Result<ExecutionContext, DomainError> {
        let delegation = self.delegation.enter(
            team,
            self.params.max_delegation_depth,
            self.params.detect_delegation_cycles,
        )?;
        Ok(Self {
            cancellation: self.cancellation.child_token(),
            delegation,
            params: self.params.clone(),
        })
    }
}

/// Why a single tool call failed
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error(transparent)]
    InvalidArguments(#[from] ArgumentError),

    #[error("tool not found: {0}")]
    ToolNotFound(String),

    #[error("failed to execute team '{team}': {source}")]
    TeamRun {
        team: String,
        #[source]
        source: TeamRunError,
    },

    #[error("failed to execute team '{team}': {source}")]
    Delegation {
        team: String,
        #[source]
        source: DomainError,
    },

    #[error("team '{0}' returned no messages")]
    EmptyTeamResponse(String),

    #[error("team '{0}' returned no assistant message content")]
    NoAssistantContent(String),

    #[error("{message}: {detail}")]
    Failed { message: String, detail: String },

    #[error("Operation cancelled")]
    Cancelled,
}

impl ExecutionError {
    /// Short message placed in [`ToolResult::error`]
    pub fn model_message(&self) -> String {
        match self {
            ExecutionError::InvalidArguments(e) => e.model_message(),
            ExecutionError::ToolNotFound(name) => format!("tool not found: {}", name),
            ExecutionError::TeamRun { source, .. } => {
                format!("failed to execute team: {}", source)
            }
            ExecutionError::Delegation { source, .. } => {
                format!("failed to execute team: {}", source)
            }
            ExecutionError::EmptyTeamResponse(_) => {
                "failed to execute team: no messages returned".to_string()
            }
            ExecutionError::NoAssistantContent(_) => {
                "failed to execute team: no assistant message content found".to_string()
            }
            ExecutionError::Failed { message, .. } => message.clone(),
            ExecutionError::Cancelled => "tool execution cancelled".to_string(),
        }
    }

    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        match self {
            ExecutionError::Cancelled => true,
            ExecutionError::TeamRun { source, .. } => source.is_cancelled(),
            _ => false,
        }
    }
}

/// A failed call: the model-facing result plus the diagnostic error
#[derive(Error, Debug)]
#[error("{source}")]
pub struct ToolCallError {
    result: ToolResult,
    source: ExecutionError,
}

impl ToolCallError {
    pub fn new(call: &ToolCall, source: ExecutionError) -> Self {
        Self {
            result: ToolResult::failure(call, source.model_message()),
            source,
        }
    }

    /// Result to hand back to the model
    pub fn result(&self) -> &ToolResult {
        &self.result
    }

    pub fn into_result(self) -> ToolResult {
        self.result
    }

    pub fn kind(&self) -> &ExecutionError {
        &self.source
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.result = self.result.with_duration(duration_ms);
        self
    }
}

/// Outcome of executing one call
pub type ToolOutcome = Result<ToolResult, ToolCallError>;

/// Model-facing result of an outcome, whichever way it went
pub fn outcome_result(outcome: &ToolOutcome) -> &ToolResult {
    match outcome {
        Ok(result) => result,
        Err(error) => error.result(),
    }
}

/// Handler for a single capability
#[async_trait]
pub trait ToolExecutor: Send + Sync {
    /// Execute `call`; the result always echoes the call's id and name
    async fn execute(&self, ctx: &ExecutionContext, call: &ToolCall) -> ToolOutcome;
}

/// Port for tool dispatch
///
/// This port defines how the reasoning loop executes tools.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ToolExecutorPort: Send + Sync {
    /// Published definitions, in registration order
    fn tool_definitions(&self) -> &[ToolDefinition];

    /// Check if a tool is available
    fn has_tool(&self, name: &str) -> bool {
        self.get_tool(name).is_some()
    }

    /// Get the definition of a specific tool
    fn get_tool(&self, name: &str) -> Option<&ToolDefinition> {
        self.tool_definitions().iter().find(|d| d.name == name)
    }

    /// Get names of all available tools, in registration order
    fn available_tools(&self) -> Vec<&str> {
        self.tool_definitions()
            .iter()
            .map(|d| d.name.as_str())
            .collect()
    }

    /// Execute a tool call
    async fn execute(&self, ctx: &ExecutionContext, call: &ToolCall) -> ToolOutcome;

    /// Execute independent calls concurrently; outcomes keep call order
    async fn execute_all(&self, ctx: &ExecutionContext, calls: &[ToolCall]) -> Vec<ToolOutcome> {
        futures::future::join_all(calls.iter().map(|call| self.execute(ctx, call))).await
    }
}
