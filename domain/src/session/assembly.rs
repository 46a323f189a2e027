//! Message assembly
//!
//! Pure transforms that combine conversation memory with new input and
//! output. They never reorder, drop or deduplicate messages; callers rely on
//! exact positions to reconstruct conversations.

use super::entities::Message;
use crate::core::error::DomainError;

/// Split input into the current turn and its context.
///
/// The last input message is the current turn; the context is `memory`
/// followed by every input message before the last one.
pub fn prepare_execution_messages(
    input: &[Message],
    memory: &[Message],
) -> Result<(Message, Vec<Message>), DomainError> {
    let (current, earlier) = input.split_last().ok_or(DomainError::EmptyInput)?;

    let mut context = Vec::with_capacity(memory.len() + earlier.len());
    context.extend_from_slice(memory);
    context.extend_from_slice(earlier);
    Ok((current.clone(), context))
}

/// One linear history for a direct model call: memory, then input
pub fn prepare_model_messages(input: &[Message], memory: &[Message]) -> Vec<Message> {
    let mut messages = Vec::with_capacity(memory.len() + input.len());
    messages.extend_from_slice(memory);
    messages.extend_from_slice(input);
    messages
}

/// Messages to append to memory after a successful run: input, then response
pub fn prepare_new_messages_for_memory(input: &[Message], response: &[Message]) -> Vec<Message> {
    let mut messages = Vec::with_capacity(input.len() + response.len());
    messages.extend_from_slice(input);
    messages.extend_from_slice(response);
    messages
}

/// Content of the first user message with non-empty content, or `""`
pub fn extract_user_message_content(messages: &[Message]) -> &str {
    messages
        .iter()
        .find(|m| m.is_user() && !m.content.is_empty())
        .map(|m| m.content.as_str())
        .unwrap_or_default()
}

/// Content of the last assistant message with non-empty content, or `""`
pub fn extract_last_assistant_message_content(messages: &[Message]) -> &str {
    messages
        .iter()
        .rev()
        .find(|m| m.is_assistant() && !m.content.is_empty())
        .map(|m| m.content.as_str())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_execution_messages() {
        let input = vec![Message::user("m1"), Message::assistant("m2"), Message::user("m3")];
        let memory = vec![Message::user("h1")];

        let (current, context) = prepare_execution_messages(&input, &memory).unwrap();

        assert_eq!(current, Message::user("m3"));
        assert_eq!(
            context,
            vec![Message::user("h1"), Message::user("m1"), Message::assistant("m2")]
        );
    }

    #[test]
    fn test_prepare_execution_messages_single_input_no_memory() {
        let (current, context) = prepare_execution_messages(&[Message::user("only")], &[]).unwrap();
        assert_eq!(current.content, "only");
        assert!(context.is_empty());
    }

    #[test]
    fn test_prepare_execution_messages_empty_input() {
        let memory = vec![Message::user("h1")];
        assert_eq!(
            prepare_execution_messages(&[], &memory).unwrap_err(),
            DomainError::EmptyInput
        );
    }

    #[test]
    fn test_prepare_model_messages() {
        let input = vec![Message::user("m1"), Message::user("m2")];
        let memory = vec![Message::user("h1"), Message::assistant("h2")];

        let messages = prepare_model_messages(&input, &memory);
        let contents: Vec<_> = messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["h1", "h2", "m1", "m2"]);
    }

    #[test]
    fn test_prepare_new_messages_for_memory() {
        let input = vec![Message::user("m1")];
        let response = vec![Message::assistant("r1"), Message::assistant("r2")];

        let messages = prepare_new_messages_for_memory(&input, &response);
        let contents: Vec<_> = messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["m1", "r1", "r2"]);
    }

    #[test]
    fn test_assembly_keeps_duplicates() {
        let input = vec![Message::user("same"), Message::user("same")];
        assert_eq!(prepare_model_messages(&input, &input).len(), 4);
    }

    #[test]
    fn test_extract_user_message_content() {
        let messages = vec![
            Message::system("sys"),
            Message::user(""),
            Message::user("first question"),
            Message::user("second question"),
        ];
        assert_eq!(extract_user_message_content(&messages), "first question");
        assert_eq!(extract_user_message_content(&[Message::assistant("a")]), "");
    }

    #[test]
    fn test_extract_last_assistant_message_content() {
        let messages = vec![
            Message::user("q"),
            Message::system("s"),
            Message::assistant("early answer"),
            Message::user("follow-up"),
            Message::tool("call-1", "tool output"),
            Message::assistant("final answer"),
            Message::assistant(""),
        ];
        assert_eq!(extract_last_assistant_message_content(&messages), "final answer");
    }

    #[test]
    fn test_extract_last_assistant_message_content_none() {
        let messages = vec![Message::user("q"), Message::assistant("")];
        assert_eq!(extract_last_assistant_message_content(&messages), "");
        assert_eq!(extract_last_assistant_message_content(&[]), "");
    }
}
