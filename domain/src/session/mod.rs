//! Conversation domain.
//!
//! - [`entities::Message`]: a single role-tagged conversation entry
//! - [`assembly`]: pure helpers that merge memory with new input/output

pub mod assembly;
pub mod entities;

pub use assembly::{
    extract_last_assistant_message_content, extract_user_message_content,
    prepare_execution_messages, prepare_model_messages, prepare_new_messages_for_memory,
};
pub use entities::{Message, Role};
