//! Tool domain value objects: the model-facing result of a call
//!
//! A [`ToolResult`] always echoes the originating call's `id` and `name`,
//! including on failure, so the reasoning loop can correlate it. Exactly one
//! of `content` or `error` is populated; the constructors are the only way
//! this crate builds one.

use serde::{Deserialize, Serialize};

use super::entities::ToolCall;

/// Result of a tool execution, carrying content or a short error.
///
/// `error` is a short, model-safe message (e.g. `"Failed to parse tool
/// arguments"`). Full diagnostic detail travels separately in the error
/// returned alongside the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResult {
    /// Echo of [`ToolCall::id`]
    pub id: String,
    /// Echo of [`ToolCall::name`]
    pub name: String,
    /// Output content (for successful execution)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Short error message (for failed execution)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Metadata about the execution
    #[serde(default)]
    pub metadata: ToolResultMetadata,
}

/// Structured metadata about tool execution
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResultMetadata {
    /// Duration of execution in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl ToolResult {
    /// Create a successful result for `call`
    pub fn success(call: &ToolCall, content: impl Into<String>) -> Self {
        Self {
            id: call.id.clone(),
            name: call.name.clone(),
            content: Some(content.into()),
            error: None,
            metadata: ToolResultMetadata::default(),
        }
    }

    /// Create a failed result for `call`
    pub fn failure(call: &ToolCall, error: impl Into<String>) -> Self {
        Self {
            id: call.id.clone(),
            name: call.name.clone(),
            content: None,
            error: Some(error.into()),
            metadata: ToolResultMetadata::default(),
        }
    }

    /// Add duration metadata
    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.metadata.duration_ms = Some(duration_ms);
        self
    }

    /// Check if execution was successful
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Get the output content
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Get the short error message
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Text shown to the model when the result is folded into a conversation
    pub fn model_text(&self) -> String {
        match (&self.content, &self.error) {
            (_, Some(error)) => format!("Error: {}", error),
            (Some(content), None) => content.clone(),
            (None, None) => String::new(),
        }
    }
}
