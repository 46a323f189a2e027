//! Conversation memory port
//!
//! Holds the message history a session accumulates across runs. Memory is
//! append-only: callers read it in order and append whole batches.

use async_trait::async_trait;
use thiserror::Error;
use toolbelt_domain::Message;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemoryError {
    #[error("memory backend error: {0}")]
    Backend(String),
}

/// Port for per-session conversation memory
#[async_trait]
pub trait MemoryStore: Send + Sync {
    /// All messages stored for `session`, oldest first
    async fn messages(&self, session: &str) -> Result<Vec<Message>, MemoryError>;

    /// Append `messages` to `session`, keeping their order
    async fn append(&self, session: &str, messages: Vec<Message>) -> Result<(), MemoryError>;
}
