//! Port for structured tool event logging.
//!
//! Defines the [`EventRecorder`] trait for recording tool-level events
//! (registrations, calls, results, team delegations) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures a
//! machine-readable transcript (JSONL).

use serde_json::Value;

/// A structured tool event.
///
/// Each event has a type string and a JSON payload containing
/// event-specific fields. Adapters add the timestamp.
#[derive(Debug, Clone)]
pub struct ToolEvent {
    /// Event type identifier (e.g., "tool_call", "tool_result", "team_delegation").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ToolEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for recording tool events to a structured log.
///
/// `record` is synchronous and non-fallible; write failures are dropped.
pub trait EventRecorder: Send + Sync {
    fn record(&self, event: ToolEvent);
}

/// No-op implementation for tests and when event logging is disabled.
pub struct NoEventRecorder;

impl EventRecorder for NoEventRecorder {
    fn record(&self, _event: ToolEvent) {}
}
