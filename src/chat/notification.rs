//! Transient notices ("toasts") the display layer shows after a turn.

use crate::analysis::ClassificationResult;
use crate::preprocessing::CleanerError;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Default,
    Destructive,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

impl Notification {
    fn new(title: &str, description: impl Into<String>, variant: Variant) -> Self {
        Self {
            title: title.to_string(),
            description: description.into(),
            variant,
        }
    }

    pub fn analysis_complete(result: &ClassificationResult) -> Self {
        if result.is_authentic {
            Self::new(
                "Analysis Complete",
                "Content appears to be authentic",
                Variant::Default,
            )
        } else {
            Self::new(
                "Analysis Complete",
                "Content appears to be potentially misleading",
                Variant::Destructive,
            )
        }
    }

    pub fn analysis_failed() -> Self {
        Self::new(
            "Analysis Failed",
            "Unable to analyze the content. Please try again.",
            Variant::Destructive,
        )
    }

    pub fn submission_rejected(reason: &CleanerError) -> Self {
        Self::new("Submission Rejected", reason.to_string(), Variant::Destructive)
    }

    pub fn busy() -> Self {
        Self::new(
            "Analysis In Progress",
            "Please wait for the current analysis to finish.",
            Variant::Default,
        )
    }
}
