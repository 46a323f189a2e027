//! Session domain entities

use serde::{Deserialize, Serialize};

use crate::tool::value_objects::ToolResult;

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
    Tool,
}

/// A message in a conversation (Entity)
///
/// Conversations are append-only: nothing in this workspace edits a message
/// once it exists, new sequences are built by concatenation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    /// Author of the message when several agents share a conversation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// For tool messages: the call this message answers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

impl Message {
    fn with_role(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            name: None,
            tool_call_id: None,
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::with_role(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::with_role(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::with_role(Role::Assistant, content)
    }

    pub fn tool(tool_call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            tool_call_id: Some(tool_call_id.into()),
            ..Self::with_role(Role::Tool, content)
        }
    }

    /// Fold a tool result back into the conversation
    pub fn from_tool_result(result: &ToolResult) -> Self {
        Self::tool(&result.id, result.model_text()).with_name(&result.name)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }

    pub fn is_assistant(&self) -> bool {
        self.role == Role::Assistant
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::entities::ToolCall;

    #[test]
    fn test_from_tool_result_success() {
        let call = ToolCall::new("call-1", "weather", "{}");
        let message = Message::from_tool_result(&ToolResult::success(&call, "sunny"));

        assert_eq!(message.role, Role::Tool);
        assert_eq!(message.content, "sunny");
        assert_eq!(message.tool_call_id.as_deref(), Some("call-1"));
        assert_eq!(message.name.as_deref(), Some("weather"));
    }

    #[test]
    fn test_from_tool_result_failure() {
        let call = ToolCall::new("call-2", "ask-team", "{}");
        let message =
            Message::from_tool_result(&ToolResult::failure(&call, "input parameter is required"));

        assert_eq!(message.content, "Error: input parameter is required");
    }

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_value(Message::assistant("hi")).unwrap();
        assert_eq!(json["role"], "assistant");
        assert!(json.get("tool_call_id").is_none());
    }
}
