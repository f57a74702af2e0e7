//! Conversation state and turn handling behind the chat window.

pub mod log;
pub mod message;
pub mod notification;
pub mod orchestrator;

pub use log::ConversationLog;
pub use message::{ChatMessage, Role, ASSESSMENT_INTRO, GREETING};
pub use notification::{Notification, Variant};
pub use orchestrator::{Orchestrator, TurnError, TurnReport};
