//! Application layer for toolbelt
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ExecutionParams;
pub use ports::{
    agent_runner::{AgentRunError, AgentRunner},
    event_recorder::{EventRecorder, NoEventRecorder, ToolEvent},
    memory_store::{MemoryError, MemoryStore},
    resource_store::{ResourceKind, ResourceStore, StoreError},
    team_orchestrator::{TeamOrchestrator, TeamRunError},
    tool_executor::{
        ExecutionContext, ExecutionError, ToolCallError, ToolExecutor, ToolExecutorPort,
        ToolOutcome, outcome_result,
    },
    tool_recorder::{NoToolRecorder, ToolRecorder},
};
pub use use_cases::execute_tool_calls::{
    ExecuteToolCallsError, ExecuteToolCallsInput, ExecuteToolCallsOutput, ExecuteToolCallsUseCase,
};
