//! Telemetry adapters
//!
//! - [`TracingToolRecorder`]: [`ToolRecorder`](toolbelt_application::ToolRecorder)
//!   that emits `tracing` events
//! - [`JsonlEventRecorder`]: [`EventRecorder`](toolbelt_application::EventRecorder)
//!   that appends one JSON object per line to a file

mod jsonl_recorder;
mod tracing_recorder;

pub use jsonl_recorder::JsonlEventRecorder;
pub use tracing_recorder::TracingToolRecorder;
