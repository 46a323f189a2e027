//! Execute Tool Calls use case
//!
//! Runs one batch of model-issued tool calls, folds every result back into
//! the conversation as a tool message and persists the exchange to memory.

use crate::ports::event_recorder::{EventRecorder, NoEventRecorder, ToolEvent};
use crate::ports::memory_store::{MemoryError, MemoryStore};
use crate::ports::tool_executor::{ExecutionContext, ToolExecutorPort, outcome_result};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use toolbelt_domain::core::string::truncate;
use toolbelt_domain::{
    Message, ToolCall, ToolResult, extract_user_message_content, prepare_new_messages_for_memory,
};
use tracing::{debug, info, warn};

const QUERY_PREVIEW_LEN: usize = 200;

/// Errors that can occur while executing a batch
///
/// Individual tool failures are not errors here; they come back as failed
/// [`ToolResult`]s so the model can react to them.
#[derive(Error, Debug)]
pub enum ExecuteToolCallsError {
    #[error("Memory error: {0}")]
    Memory(#[from] MemoryError),

    #[error("Operation cancelled")]
    Cancelled,
}

/// Input for the ExecuteToolCalls use case
#[derive(Debug, Clone)]
pub struct ExecuteToolCallsInput {
    /// Memory session the exchange is appended to
    pub session: String,
    /// New conversation messages that led to these calls
    pub input: Vec<Message>,
    /// Calls issued by the model, in order
    pub calls: Vec<ToolCall>,
}

impl ExecuteToolCallsInput {
    pub fn new(session: impl Into<String>, input: Vec<Message>, calls: Vec<ToolCall>) -> Self {
        Self {
            session: session.into(),
            input,
            calls,
        }
    }
}

/// Output of the ExecuteToolCalls use case
#[derive(Debug, Clone)]
pub struct ExecuteToolCallsOutput {
    /// One result per call, in call order
    pub results: Vec<ToolResult>,
    /// Tool messages folded from `results`
    pub messages: Vec<Message>,
}

impl ExecuteToolCallsOutput {
    pub fn failure_count(&self) -> usize {
        self.results.iter().filter(|r| !r.is_success()).count()
    }
}

/// Use case for executing a batch of tool calls
pub struct ExecuteToolCallsUseCase<T: ToolExecutorPort + 'static, M: MemoryStore + 'static> {
    tools: Arc<T>,
    memory: Arc<M>,
    events: Arc<dyn EventRecorder>,
}

impl<T: ToolExecutorPort + 'static, M: MemoryStore + 'static> ExecuteToolCallsUseCase<T, M> {
    pub fn new(tools: Arc<T>, memory: Arc<M>) -> Self {
        Self {
            tools,
            memory,
            events: Arc::new(NoEventRecorder),
        }
    }

    pub fn with_event_recorder(mut self, events: Arc<dyn EventRecorder>) -> Self {
        self.events = events;
        self
    }

    pub async fn execute(
        &self,
        ctx: &ExecutionContext,
        input: ExecuteToolCallsInput,
    ) -> Result<ExecuteToolCallsOutput, ExecuteToolCallsError> {
        if ctx.is_cancelled() {
            return Err(ExecuteToolCallsError::Cancelled);
        }

        let query = extract_user_message_content(&input.input);
        info!(
            session = %input.session,
            calls = input.calls.len(),
            "Executing tool calls"
        );
        self.events.record(ToolEvent::new(
            "tool_batch",
            json!({
                "session": input.session,
                "query": truncate(query, QUERY_PREVIEW_LEN),
                "calls": input.calls.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
            }),
        ));

        let outcomes = self.tools.execute_all(ctx, &input.calls).await;

        let mut results = Vec::with_capacity(outcomes.len());
        for outcome in &outcomes {
            if let Err(e) = outcome {
                warn!(tool = %e.result().name, call_id = %e.result().id, error = %e, "Tool call failed");
            }
            results.push(outcome_result(outcome).clone());
        }

        let messages: Vec<Message> = results.iter().map(Message::from_tool_result).collect();

        let new_messages = prepare_new_messages_for_memory(&input.input, &messages);
        debug!(
            session = %input.session,
            count = new_messages.len(),
            "Appending exchange to memory"
        );
        self.memory.append(&input.session, new_messages).await?;

        let output = ExecuteToolCallsOutput { results, messages };
        self.events.record(ToolEvent::new(
            "tool_batch_completed",
            json!({
                "session": input.session,
                "results": output.results.len(),
                "failures": output.failure_count(),
            }),
        ));

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::tool_executor::{ExecutionError, ToolCallError, ToolOutcome};
    use async_trait::async_trait;
    use std::sync::Mutex;
    use tokio_util::sync::CancellationToken;
    use toolbelt_domain::{Role, ToolDefinition};

    struct EchoTools {
        definitions: Vec<ToolDefinition>,
    }

    impl EchoTools {
        fn new() -> Self {
            Self {
                definitions: vec![ToolDefinition::new("echo", "Echo arguments")],
            }
        }
    }

    #[async_trait]
    impl ToolExecutorPort for EchoTools {
        fn tool_definitions(&self) -> &[ToolDefinition] {
            &self.definitions
        }

        async fn execute(&self, _ctx: &ExecutionContext, call: &ToolCall) -> ToolOutcome {
            if call.name == "echo" {
                Ok(ToolResult::success(call, call.arguments.clone()))
            } else {
                Err(ToolCallError::new(
                    call,
                    ExecutionError::ToolNotFound(call.name.clone()),
                ))
            }
        }
    }

    #[derive(Default)]
    struct RecordingMemory {
        appended: Mutex<Vec<(String, Vec<Message>)>>,
    }

    #[async_trait]
    impl MemoryStore for RecordingMemory {
        async fn messages(&self, _session: &str) -> Result<Vec<Message>, MemoryError> {
            Ok(vec![])
        }

        async fn append(&self, session: &str, messages: Vec<Message>) -> Result<(), MemoryError> {
            self.appended
                .lock()
                .unwrap()
                .push((session.to_string(), messages));
            Ok(())
        }
    }

    #[derive(Default)]
    struct CollectingRecorder {
        events: Mutex<Vec<ToolEvent>>,
    }

    impl EventRecorder for CollectingRecorder {
        fn record(&self, event: ToolEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    #[tokio::test]
    async fn test_execute_folds_results_in_order() {
        let memory = Arc::new(RecordingMemory::default());
        let use_case = ExecuteToolCallsUseCase::new(Arc::new(EchoTools::new()), memory.clone());

        let input = ExecuteToolCallsInput::new(
            "s1",
            vec![Message::user("do things")],
            vec![
                ToolCall::new("c1", "echo", r#"{"a":1}"#),
                ToolCall::new("c2", "missing", "{}"),
                ToolCall::new("c3", "echo", r#"{"b":2}"#),
            ],
        );

        let output = use_case
            .execute(&ExecutionContext::new(), input)
            .await
            .unwrap();

        let ids: Vec<_> = output.results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["c1", "c2", "c3"]);
        assert_eq!(output.failure_count(), 1);
        assert_eq!(output.messages[1].content, "Error: tool not found: missing");
        assert!(output.messages.iter().all(|m| m.role == Role::Tool));

        let appended = memory.appended.lock().unwrap();
        assert_eq!(appended.len(), 1);
        assert_eq!(appended[0].0, "s1");
        assert_eq!(appended[0].1.len(), 4);
        assert_eq!(appended[0].1[0], Message::user("do things"));
        assert_eq!(appended[0].1[1].tool_call_id.as_deref(), Some("c1"));
    }

    #[tokio::test]
    async fn test_execute_records_query() {
        let recorder = Arc::new(CollectingRecorder::default());
        let use_case = ExecuteToolCallsUseCase::new(
            Arc::new(EchoTools::new()),
            Arc::new(RecordingMemory::default()),
        )
        .with_event_recorder(recorder.clone());

        let input = ExecuteToolCallsInput::new(
            "s1",
            vec![Message::system("sys"), Message::user("what time is it")],
            vec![ToolCall::new("c1", "echo", "{}")],
        );
        use_case
            .execute(&ExecutionContext::new(), input)
            .await
            .unwrap();

        let events = recorder.events.lock().unwrap();
        assert_eq!(events[0].event_type, "tool_batch");
        assert_eq!(events[0].payload["query"], "what time is it");
        assert_eq!(events[1].payload["failures"], 0);
    }

    #[tokio::test]
    async fn test_execute_cancelled_before_start() {
        let memory = Arc::new(RecordingMemory::default());
        let use_case = ExecuteToolCallsUseCase::new(Arc::new(EchoTools::new()), memory.clone());

        let token = CancellationToken::new();
        token.cancel();
        let ctx = ExecutionContext::new().with_cancellation(token);

        let result = use_case
            .execute(&ctx, ExecuteToolCallsInput::new("s1", vec![], vec![]))
            .await;

        assert!(matches!(result, Err(ExecuteToolCallsError::Cancelled)));
        assert!(memory.appended.lock().unwrap().is_empty());
    }
}
