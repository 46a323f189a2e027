//! Port for tool telemetry.
//!
//! The registry reports registrations and executions here; adapters turn
//! them into metrics or structured logs. All methods are synchronous and
//! infallible so recording never disturbs execution.

use std::time::Duration;

/// Port for recording tool lifecycle events.
pub trait ToolRecorder: Send + Sync {
    /// A tool was published under `name`.
    fn record_tool_registered(&self, name: &str, tool_type: &str);

    /// A call finished, successfully or not.
    fn record_tool_executed(&self, name: &str, success: bool, elapsed: Duration);

    /// A team tool handed a call to `team` at the given nesting depth.
    fn record_team_delegation(&self, _team: &str, _depth: usize) {}
}

/// No-op implementation for tests and when telemetry is disabled.
pub struct NoToolRecorder;

impl ToolRecorder for NoToolRecorder {
    fn record_tool_registered(&self, _name: &str, _tool_type: &str) {}

    fn record_tool_executed(&self, _name: &str, _success: bool, _elapsed: Duration) {}
}
