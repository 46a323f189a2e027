//! `tracing`-backed tool recorder.

use std::time::Duration;

use toolbelt_application::ToolRecorder;
use tracing::{debug, info};

/// Emits tool lifecycle events under the `toolbelt::tools` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingToolRecorder;

impl ToolRecorder for TracingToolRecorder {
    fn record_tool_registered(&self, name: &str, tool_type: &str) {
        debug!(target: "toolbelt::tools", tool = %name, tool_type, "tool registered");
    }

    fn record_tool_executed(&self, name: &str, success: bool, elapsed: Duration) {
        info!(
            target: "toolbelt::tools",
            tool = %name,
            success,
            elapsed_ms = elapsed.as_millis() as u64,
            "tool executed"
        );
    }

    fn record_team_delegation(&self, team: &str, depth: usize) {
        info!(target: "toolbelt::tools", team = %team, depth, "team delegation");
    }
}
