//! Async seam in front of the classifier.
//!
//! A real deployment would call out to an inference backend here; the demo
//! stands in for that round-trip with a configurable [`Latency`].

use crate::analysis::{classifier::HeuristicClassifier, verdict::ClassificationResult, AnalysisResult};
use crate::config::AnalysisConfig;
use async_trait::async_trait;
use std::time::Duration;

pub const DEFAULT_LATENCY_MS: u64 = 2000;

#[async_trait]
pub trait Analyzer: Send + Sync {
    async fn analyze(&self, text: &str) -> AnalysisResult<ClassificationResult>;

    fn name(&self) -> &'static str;
}

/// Simulated backend latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Latency(Duration);

impl Latency {
    pub const fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }

    pub const fn none() -> Self {
        Self(Duration::ZERO)
    }

    pub fn duration(&self) -> Duration {
        self.0
    }

    pub async fn wait(&self) {
        if !self.0.is_zero() {
            tokio::time::sleep(self.0).await;
        }
    }
}

#[async_trait]
impl Analyzer for HeuristicClassifier {
    async fn analyze(&self, text: &str) -> AnalysisResult<ClassificationResult> {
        self.classify(text)
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}

/// Heuristic classifier that answers only after `latency` has elapsed.
pub struct DelayedAnalyzer {
    classifier: HeuristicClassifier,
    latency: Latency,
}

impl DelayedAnalyzer {
    pub fn new(classifier: HeuristicClassifier, latency: Latency) -> Self {
        Self { classifier, latency }
    }

    pub fn from_config(config: &AnalysisConfig) -> AnalysisResult<Self> {
        Ok(Self::new(
            HeuristicClassifier::from_config(config)?,
            config.latency(),
        ))
    }

    pub fn latency(&self) -> Latency {
        self.latency
    }
}

#[async_trait]
impl Analyzer for DelayedAnalyzer {
    async fn analyze(&self, text: &str) -> AnalysisResult<ClassificationResult> {
        self.latency.wait().await;
        self.classifier.classify(text)
    }

    fn name(&self) -> &'static str {
        "heuristic-delayed"
    }
}
