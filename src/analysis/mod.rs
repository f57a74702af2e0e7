//! # Authenticity analysis
//!
//! Heuristic verdicts for submitted news text. There is no model behind this:
//! a submission is scanned for two fixed phrase vocabularies, the hits pick a
//! base verdict, and the confidence is jittered by one random draw.
//!
//! ## Architecture
//!
//! ```text
//! text → keywords (phrase hits) → verdict (base decision) → offsets (jitter) → ClassificationResult
//! ```
//!
//! `analyzer` wraps the synchronous classifier behind an async seam with a
//! simulated backend latency.

pub mod analyzer;
pub mod classifier;
pub mod keywords;
pub mod offsets;
pub mod verdict;

pub use analyzer::{Analyzer, DelayedAnalyzer, Latency};
pub use classifier::HeuristicClassifier;
pub use keywords::{KeywordMatcher, PhraseHits, RELIABLE, SUSPICIOUS};
pub use offsets::{FixedOffset, OffsetSource, SeededOffsets, OFFSET_RANGE};
pub use verdict::{ClassificationResult, ConfidenceTier, Verdict};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Input validation failed: submission is blank")]
    InvalidInput,

    #[error("Classification failed: {reason}")]
    ClassificationFailure { reason: String },

    #[error("Phrase pattern failed to compile: {0}")]
    Pattern(#[from] regex::Error),
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;

#[cfg(test)]
mod tests;
