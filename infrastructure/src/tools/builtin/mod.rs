//! Builtin tools
//!
//! Capabilities implemented directly by the platform. Each tool module
//! exposes a name constant, a definition and an execute function over
//! parsed [`ToolArguments`]; [`BuiltinToolExecutor`] routes to them.

mod noop;
mod terminate;
mod time;

use std::time::Instant;

use async_trait::async_trait;
use toolbelt_application::{
    ExecutionContext, ExecutionError, ToolCallError, ToolExecutor, ToolOutcome,
};
use toolbelt_domain::{ToolArguments, ToolCall, ToolDefinition, ToolResult};

pub use noop::NOOP;
pub use terminate::TERMINATE;
pub use time::GET_CURRENT_TIME;

/// Definitions of every builtin, in catalogue order
pub fn builtin_definitions() -> Vec<ToolDefinition> {
    vec![
        noop::noop_definition(),
        terminate::terminate_definition(),
        time::get_current_time_definition(),
    ]
}

/// Catalogue definition for `name`
pub fn builtin_definition(name: &str) -> Option<ToolDefinition> {
    builtin_definitions().into_iter().find(|d| d.name == name)
}

/// Executor for one builtin capability
#[derive(Debug, Clone)]
pub struct BuiltinToolExecutor {
    builtin: String,
}

impl BuiltinToolExecutor {
    /// Executor for the builtin `name`; `None` if the catalogue has no such tool
    pub fn new(name: &str) -> Option<Self> {
        builtin_definition(name).map(|_| Self {
            builtin: name.to_string(),
        })
    }

    pub fn builtin(&self) -> &str {
        &self.builtin
    }

    fn run(&self, args: &ToolArguments) -> Result<String, ExecutionError> {
        match self.builtin.as_str() {
            NOOP => noop::execute_noop(args),
            TERMINATE => terminate::execute_terminate(args),
            GET_CURRENT_TIME => time::execute_get_current_time(args),
            other => Err(ExecutionError::ToolNotFound(other.to_string())),
        }
    }
}

#[async_trait]
impl ToolExecutor for BuiltinToolExecutor {
    async fn execute(&self, ctx: &ExecutionContext, call: &ToolCall) -> ToolOutcome {
        if ctx.is_cancelled() {
            return Err(ToolCallError::new(call, ExecutionError::Cancelled));
        }

        let start = Instant::now();
        let outcome = ToolArguments::parse(call)
            .map_err(ExecutionError::from)
            .and_then(|args| self.run(&args));
        let duration_ms = start.elapsed().as_millis() as u64;

        match outcome {
            Ok(content) => Ok(ToolResult::success(call, content).with_duration(duration_ms)),
            Err(e) => Err(ToolCallError::new(call, e).with_duration(duration_ms)),
        }
    }
}
