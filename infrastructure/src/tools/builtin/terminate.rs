//! terminate: ends the agent's turn with a final response

use serde_json::json;
use toolbelt_application::ExecutionError;
use toolbelt_domain::{ToolArguments, ToolDefinition};

pub const TERMINATE: &str = "terminate";

pub fn terminate_definition() -> ToolDefinition {
    ToolDefinition::new(
        TERMINATE,
        "Finish the conversation and return the final response to the user",
    )
    .with_property(
        "response",
        json!({"type": "string", "description": "The final response"}),
        true,
    )
}

pub fn execute_terminate(args: &ToolArguments) -> Result<String, ExecutionError> {
    Ok(args.require_str("response")?.to_string())
}
