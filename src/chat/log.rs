//! Ordered conversation history, owned by whoever drives the chat.

use crate::chat::message::ChatMessage;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct ConversationLog {
    messages: Vec<ChatMessage>,
}

impl ConversationLog {
    /// A fresh conversation, opened by the greeting.
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::greeting()],
        }
    }

    /// Append a message and hand back the stored copy.
    pub fn push(&mut self, message: ChatMessage) -> &ChatMessage {
        let index = self.messages.len();
        self.messages.push(message);
        &self.messages[index]
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Drop the history and start over from the greeting.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for ConversationLog {
    fn default() -> Self {
        Self::new()
    }
}
