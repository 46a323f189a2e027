//! Process-local conversation memory.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use toolbelt_application::{MemoryError, MemoryStore};
use toolbelt_domain::Message;

/// Conversation memory held in a map of session -> messages.
///
/// Appends to one session are serialized by the lock; nothing is persisted.
#[derive(Debug, Default)]
pub struct InMemoryMemoryStore {
    sessions: RwLock<HashMap<String, Vec<Message>>>,
}

impl InMemoryMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MemoryStore for InMemoryMemoryStore {
    async fn messages(&self, session: &str) -> Result<Vec<Message>, MemoryError> {
        Ok(self
            .sessions
            .read()
            .await
            .get(session)
            .cloned()
            .unwrap_or_default())
    }

    async fn append(&self, session: &str, messages: Vec<Message>) -> Result<(), MemoryError> {
        self.sessions
            .write()
            .await
            .entry(session.to_string())
            .or_default()
            .extend(messages);
        Ok(())
    }
}
