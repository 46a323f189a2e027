//! noop: answers with its message, or "noop"

use serde_json::json;
use toolbelt_application::ExecutionError;
use toolbelt_domain::{ToolArguments, ToolDefinition};

pub const NOOP: &str = "noop";

pub fn noop_definition() -> ToolDefinition {
    ToolDefinition::new(NOOP, "Do nothing and return the given message").with_property(
        "message",
        json!({"type": "string", "description": "Message to echo back"}),
        false,
    )
}

pub fn execute_noop(args: &ToolArguments) -> Result<String, ExecutionError> {
    Ok(args.optional_str("message")?.unwrap_or(NOOP).to_string())
}
