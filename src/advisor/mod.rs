//! The flood resilience advisor: a conversation over a generative chat service.
//!
//! [`Conversation::send`] borrows the conversation mutably for the whole
//! request, so exchanges are strictly sequential and replies can never be
//! appended out of order.

pub mod gemini;

use thiserror::Error;
use tracing::{debug, warn};

use crate::data::{ADVISOR_FAILURE, ADVISOR_GREETING};
use crate::models::ChatMessage;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("no API key configured (set API_KEY or VITE_API_KEY)")]
    MissingApiKey,

    #[error("chat request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("chat service returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("chat service returned no text")]
    EmptyReply,
}

/// One outbound chat turn.
#[derive(Debug)]
pub struct ChatRequest<'a> {
    /// Monotonically increasing per conversation.
    pub id: u64,
    pub message: &'a str,
    /// Prior turns, oldest first, excluding `message`.
    pub history: &'a [ChatMessage],
}

/// A service that answers a chat turn with reply text.
#[allow(async_fn_in_trait)]
pub trait ChatService {
    async fn reply(&self, request: &ChatRequest<'_>) -> Result<String, AdvisorError>;
}

/// Message history of one advisor session, opening with the greeting.
#[derive(Debug)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::model(ADVISOR_GREETING)],
            next_id: 1,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Send `input` and append the reply, or an error-flagged message if the
    /// service fails. Blank input is ignored and returns `None`.
    pub async fn send<C: ChatService>(
        &mut self,
        service: &C,
        input: &str,
    ) -> Option<&ChatMessage> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        // Error bubbles are local UI state, never part of the model's context.
        let history: Vec<ChatMessage> = self
            .messages
            .iter()
            .filter(|m| !m.is_error)
            .cloned()
            .collect();

        self.messages.push(ChatMessage::user(input));

        let id = self.next_id;
        self.next_id += 1;

        let request = ChatRequest {
            id,
            message: input,
            history: &history,
        };
        debug!(request_id = id, turns = history.len(), "sending advisor request");

        let reply = match service.reply(&request).await {
            Ok(text) => ChatMessage::model(text),
            Err(e) => {
                warn!(request_id = id, error = %e, "advisor request failed");
                ChatMessage::error(ADVISOR_FAILURE)
            }
        };

        self.messages.push(reply);
        self.messages.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use std::cell::RefCell;

    /// Echoes the message and records what it was sent.
    #[derive(Default)]
    struct Echo {
        seen: RefCell<Vec<(u64, usize)>>,
    }

    impl ChatService for Echo {
        async fn reply(&self, request: &ChatRequest<'_>) -> Result<String, AdvisorError> {
            self.seen
                .borrow_mut()
                .push((request.id, request.history.len()));
            Ok(format!("re: {}", request.message))
        }
    }

    struct Offline;

    impl ChatService for Offline {
        async fn reply(&self, _request: &ChatRequest<'_>) -> Result<String, AdvisorError> {
            Err(AdvisorError::MissingApiKey)
        }
    }

    #[test]
    fn test_opens_with_greeting() {
        let conversation = Conversation::new();
        assert_eq!(conversation.messages().len(), 1);
        assert_eq!(conversation.messages()[0].role, Role::Model);
        assert!(conversation.messages()[0].text.starts_with("Hello!"));
    }

    #[tokio::test]
    async fn test_reply_is_appended() {
        let mut conversation = Conversation::new();
        let reply = conversation
            .send(&Echo::default(), "Is Luzong safe?")
            .await
            .cloned()
            .unwrap();

        assert_eq!(reply.text, "re: Is Luzong safe?");
        assert!(!reply.is_error);
        let roles: Vec<Role> = conversation.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::Model, Role::User, Role::Model]);
    }

    #[tokio::test]
    async fn test_blank_input_is_ignored() {
        let mut conversation = Conversation::new();
        assert!(conversation.send(&Echo::default(), "   ").await.is_none());
        assert_eq!(conversation.messages().len(), 1);
    }

    #[tokio::test]
    async fn test_failure_becomes_error_message() {
        let mut conversation = Conversation::new();
        let reply = conversation.send(&Offline, "hello").await.cloned().unwrap();
        assert!(reply.is_error);
        assert_eq!(reply.text, ADVISOR_FAILURE);

        // The conversation carries on after a failure.
        let service = Echo::default();
        conversation.send(&service, "still there?").await;
        assert_eq!(conversation.messages().len(), 5);
        // Greeting and first user turn; the error turn is left out.
        assert_eq!(service.seen.borrow()[0].1, 2);
    }

    #[tokio::test]
    async fn test_request_ids_and_history_grow_in_order() {
        let service = Echo::default();
        let mut conversation = Conversation::new();
        conversation.send(&service, "one").await;
        conversation.send(&service, "two").await;
        conversation.send(&service, "three").await;

        assert_eq!(*service.seen.borrow(), vec![(1, 1), (2, 3), (3, 5)]);
        let texts: Vec<&str> = conversation
            .messages()
            .iter()
            .skip(1)
            .map(|m| m.text.as_str())
            .collect();
        assert_eq!(texts, vec!["one", "re: one", "two", "re: two", "three", "re: three"]);
    }
}
