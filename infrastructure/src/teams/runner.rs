//! Agent runner used when no model runtime is wired in.

use async_trait::async_trait;
use toolbelt_application::{AgentRunError, AgentRunner, ExecutionContext};
use toolbelt_domain::{AgentResource, Message};

/// Agent runner that refuses every turn.
///
/// Model inference happens outside this workspace; binaries without a
/// runtime use this so team tools fail with a clear message.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredAgentRunner;

#[async_trait]
impl AgentRunner for UnconfiguredAgentRunner {
    async fn run_agent(
        &self,
        _ctx: &ExecutionContext,
        agent: &AgentResource,
        _current: &Message,
        _context: &[Message],
    ) -> Result<Vec<Message>, AgentRunError> {
        Err(AgentRunError::NoRuntime {
            agent: agent.name.clone(),
        })
    }
}
