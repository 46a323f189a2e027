//! Partial-binding executor
//!
//! Wraps the executor of a specialized tool and injects the bound parameter
//! values into every call before delegating. Bound values override anything
//! the model supplied under the same key.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};
use toolbelt_application::{
    ExecutionContext, ExecutionError, ToolCallError, ToolExecutor, ToolOutcome,
};
use toolbelt_domain::{ToolArguments, ToolCall, ToolPartial};

pub struct PartialToolExecutor {
    inner: Arc<dyn ToolExecutor>,
    bound: Map<String, Value>,
}

impl PartialToolExecutor {
    pub fn new(inner: Arc<dyn ToolExecutor>, partial: &ToolPartial) -> Self {
        Self {
            inner,
            bound: partial.bound_arguments(),
        }
    }
}

#[async_trait]
impl ToolExecutor for PartialToolExecutor {
    async fn execute(&self, ctx: &ExecutionContext, call: &ToolCall) -> ToolOutcome {
        let args = ToolArguments::parse(call)
            .map_err(|e| ToolCallError::new(call, ExecutionError::from(e)))?;

        let bound_call = call.with_arguments(args.merged_with(&self.bound).as_map());
        self.inner.execute(ctx, &bound_call).await
    }
}
