//! Chat message structs, with the optional verdict a bot reply carries.

use crate::analysis::ClassificationResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const GREETING: &str = "Hello! I'm TruthBot, your AI-powered fact-checker. Send me a news article, URL, or claim and I'll analyze its authenticity for you.";
pub const ASSESSMENT_INTRO: &str = "I've analyzed your submission. Here's my assessment:";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub role: Role,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<ClassificationResult>,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    fn new(role: Role, content: String, analysis: Option<ClassificationResult>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content,
            analysis,
            timestamp: Utc::now(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content.into(), None)
    }

    pub fn bot(content: impl Into<String>) -> Self {
        Self::new(Role::Bot, content.into(), None)
    }

    pub fn greeting() -> Self {
        Self::bot(GREETING)
    }

    /// Bot reply carrying a verdict.
    pub fn assessment(analysis: ClassificationResult) -> Self {
        Self::new(Role::Bot, ASSESSMENT_INTRO.to_string(), Some(analysis))
    }
}
