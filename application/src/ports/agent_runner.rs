//! Agent runner port
//!
//! Runs a single agent turn: the agent's prompt and tools against the
//! current message and its context. Model inference lives behind this port.

use async_trait::async_trait;
use thiserror::Error;
use toolbelt_domain::{AgentResource, Message};

use super::tool_executor::ExecutionContext;

/// Errors from a single agent turn
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgentRunError {
    #[error("no model runtime configured for agent '{agent}'")]
    NoRuntime { agent: String },

    #[error("agent '{agent}' failed: {message}")]
    Failed { agent: String, message: String },

    #[error("Operation cancelled")]
    Cancelled,
}

impl AgentRunError {
    pub fn failed(agent: &str, message: impl Into<String>) -> Self {
        AgentRunError::Failed {
            agent: agent.to_string(),
            message: message.into(),
        }
    }

    /// Agent the error belongs to; empty for cancellation
    pub fn agent(&self) -> &str {
        match self {
            AgentRunError::NoRuntime { agent } | AgentRunError::Failed { agent, .. } => agent,
            AgentRunError::Cancelled => "",
        }
    }
}

/// Port for running one agent turn
///
/// Returns the messages the agent produced, in order. The caller appends
/// them to the shared transcript.
#[async_trait]
pub trait AgentRunner: Send + Sync {
    async fn run_agent(
        &self,
        ctx: &ExecutionContext,
        agent: &AgentResource,
        current: &Message,
        context: &[Message],
    ) -> Result<Vec<Message>, AgentRunError>;
}
