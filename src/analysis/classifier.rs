//! The heuristic classifier: phrase hits → base verdict → jittered confidence.

use crate::analysis::{
    keywords::KeywordMatcher,
    offsets::{OffsetSource, SeededOffsets, OFFSET_RANGE},
    verdict::{ClassificationResult, Verdict},
    AnalysisError, AnalysisResult,
};
use crate::config::AnalysisConfig;
use std::sync::Arc;
use tracing::debug;

/// Stateless apart from the injected offset source; cheap to clone and safe
/// to share between concurrent requests.
#[derive(Clone)]
pub struct HeuristicClassifier {
    matcher: KeywordMatcher,
    offsets: Arc<dyn OffsetSource>,
}

impl HeuristicClassifier {
    pub fn new(offsets: Arc<dyn OffsetSource>) -> AnalysisResult<Self> {
        Ok(Self {
            matcher: KeywordMatcher::new()?,
            offsets,
        })
    }

    pub fn seeded(seed: u64) -> AnalysisResult<Self> {
        Self::new(Arc::new(SeededOffsets::new(seed)))
    }

    pub fn from_config(config: &AnalysisConfig) -> AnalysisResult<Self> {
        Self::new(Arc::new(SeededOffsets::from_seed(config.seed)))
    }

    /// Classify a submission the caller has already checked for blankness.
    pub fn classify(&self, text: &str) -> AnalysisResult<ClassificationResult> {
        let hits = self.matcher.scan(text);
        let verdict = Verdict::from_hits(&hits);

        let offset = self.offsets.draw()?;
        if !OFFSET_RANGE.contains(&offset) {
            return Err(AnalysisError::ClassificationFailure {
                reason: format!(
                    "offset {} outside {}..={}",
                    offset,
                    OFFSET_RANGE.start(),
                    OFFSET_RANGE.end()
                ),
            });
        }

        let result = ClassificationResult::from_verdict(verdict, offset);

        debug!(
            verdict = ?verdict,
            suspicious = ?hits.suspicious,
            reliable = ?hits.reliable,
            offset,
            confidence = result.confidence,
            "Submission classified"
        );

        Ok(result)
    }

    /// Like [`classify`](Self::classify) but rejects blank input itself.
    pub fn classify_strict(&self, text: &str) -> AnalysisResult<ClassificationResult> {
        if text.trim().is_empty() {
            return Err(AnalysisError::InvalidInput);
        }
        self.classify(text)
    }
}
