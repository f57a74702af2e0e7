//! High-level coordinator: submission → validation → analysis → conversation.

use crate::analysis::{AnalysisError, AnalysisResult, Analyzer, DelayedAnalyzer};
use crate::chat::{log::ConversationLog, message::ChatMessage, notification::Notification};
use crate::config::AnalysisConfig;
use crate::preprocessing::{Cleaner, CleanerError, Preprocessor, SubmissionKind};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{error, info, instrument, warn};

#[derive(Debug, Error)]
pub enum TurnError {
    #[error("Submission rejected: {0}")]
    Rejected(#[from] CleanerError),

    #[error("Analysis failed: {0}")]
    Analysis(#[from] AnalysisError),
}

impl TurnError {
    /// What the user is told about this failure.
    pub fn notification(&self) -> Notification {
        match self {
            TurnError::Rejected(reason) => Notification::submission_rejected(reason),
            TurnError::Analysis(_) => Notification::analysis_failed(),
        }
    }
}

/// Outcome of a successful turn.
#[derive(Serialize, Debug, Clone)]
pub struct TurnReport {
    pub kind: SubmissionKind,
    pub reply: ChatMessage,
    pub notification: Notification,
}

pub struct Orchestrator {
    analyzer: Arc<dyn Analyzer>,
    preprocessor: Preprocessor,
}

impl Orchestrator {
    pub fn new(analyzer: Arc<dyn Analyzer>, preprocessor: Preprocessor) -> Self {
        Self {
            analyzer,
            preprocessor,
        }
    }

    pub fn from_config(config: &AnalysisConfig) -> AnalysisResult<Self> {
        Ok(Self::new(
            Arc::new(DelayedAnalyzer::from_config(config)?),
            Preprocessor::new(Cleaner::new(config.max_input_length)),
        ))
    }

    /// Drive one conversational turn.
    ///
    /// A rejected submission leaves `log` untouched. Once accepted, the user
    /// message is appended before analysis starts; the bot reply is appended
    /// only if analysis succeeds.
    #[instrument(skip(self, log, input), fields(analyzer = self.analyzer.name()))]
    pub async fn turn(
        &self,
        log: &mut ConversationLog,
        input: &str,
    ) -> Result<TurnReport, TurnError> {
        let submission = match self.preprocessor.process(input) {
            Ok(submission) => submission,
            Err(reason) => {
                warn!(error = %reason, "Submission rejected");
                return Err(reason.into());
            }
        };

        log.push(ChatMessage::user(submission.text.as_str()));
        let start = Instant::now();

        match self.analyzer.analyze(&submission.text).await {
            Ok(analysis) => {
                let notification = Notification::analysis_complete(&analysis);

                info!(
                    kind = submission.kind.as_str(),
                    authentic = analysis.is_authentic,
                    confidence = analysis.confidence,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "Submission analyzed"
                );

                let reply = log.push(ChatMessage::assessment(analysis)).clone();

                Ok(TurnReport {
                    kind: submission.kind,
                    reply,
                    notification,
                })
            }
            Err(e) => {
                error!(
                    kind = submission.kind.as_str(),
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    error = ?e,
                    "Submission analysis failed"
                );
                Err(e.into())
            }
        }
    }
}
