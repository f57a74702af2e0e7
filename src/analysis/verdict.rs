//! Verdict vocabulary: base decisions, reasoning templates and the result value
//! handed to the display layer.

use crate::analysis::keywords::PhraseHits;
use serde::{Deserialize, Serialize};

pub const MIN_CONFIDENCE: i32 = 60;
pub const MAX_CONFIDENCE: i32 = 95;

const AUTHENTIC_SOURCES: [&str; 3] = ["Reuters", "AP News", "BBC"];
const PENDING_SOURCES: [&str; 1] = ["Fact-check pending"];

/// Base decision taken from the phrase hits, before any jitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Suspicious phrasing with no attribution to offset it.
    Sensationalized,
    /// At least one attribution phrase, whatever else is present.
    Credible,
    /// Neither vocabulary matched.
    Indeterminate,
}

impl Verdict {
    /// Suspicious hits only count when no reliable phrase is present, so a
    /// submission carrying both lands on `Credible`.
    pub fn from_hits(hits: &PhraseHits) -> Self {
        if hits.has_suspicious() && !hits.has_reliable() {
            Verdict::Sensationalized
        } else if hits.has_reliable() {
            Verdict::Credible
        } else {
            Verdict::Indeterminate
        }
    }

    pub fn is_authentic(self) -> bool {
        !matches!(self, Verdict::Sensationalized)
    }

    pub fn base_confidence(self) -> i32 {
        match self {
            Verdict::Sensationalized => 85,
            Verdict::Credible => 90,
            Verdict::Indeterminate => 75,
        }
    }

    pub fn reasoning(self) -> &'static str {
        match self {
            Verdict::Sensationalized => {
                "Contains sensationalized language patterns commonly found in misinformation. Lacks credible source citations."
            }
            Verdict::Credible => {
                "Contains credible language patterns and appears to reference authoritative sources."
            }
            Verdict::Indeterminate => "Analysis based on content patterns and language indicators.",
        }
    }
}

/// Colour bands used when rendering the confidence figure.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceTier {
    High,
    Moderate,
    Low,
}

/// On the wire the result also carries its `label` and `tier`, so the display
/// layer renders them instead of recomputing. Both are ignored when reading a
/// result back.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub is_authentic: bool,
    /// Always within `[MIN_CONFIDENCE, MAX_CONFIDENCE]`.
    pub confidence: u8,
    pub reasoning: String,
    /// Never empty.
    pub sources: Vec<String>,
}

impl ClassificationResult {
    pub fn from_verdict(verdict: Verdict, offset: i32) -> Self {
        let is_authentic = verdict.is_authentic();

        Self {
            is_authentic,
            confidence: clamp_confidence(verdict.base_confidence() + offset),
            reasoning: verdict.reasoning().to_string(),
            sources: sources_for(is_authentic),
        }
    }

    pub fn label(&self) -> &'static str {
        if self.is_authentic {
            "Likely Authentic"
        } else {
            "Potentially Misleading"
        }
    }

    pub fn tier(&self) -> ConfidenceTier {
        if self.confidence >= 80 {
            ConfidenceTier::High
        } else if self.confidence >= 60 {
            ConfidenceTier::Moderate
        } else {
            ConfidenceTier::Low
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResultView<'a> {
    is_authentic: bool,
    confidence: u8,
    reasoning: &'a str,
    sources: &'a [String],
    label: &'static str,
    tier: ConfidenceTier,
}

impl Serialize for ClassificationResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        ResultView {
            is_authentic: self.is_authentic,
            confidence: self.confidence,
            reasoning: &self.reasoning,
            sources: &self.sources,
            label: self.label(),
            tier: self.tier(),
        }
        .serialize(serializer)
    }
}

pub fn clamp_confidence(raw: i32) -> u8 {
    // The clamp bounds fit in a u8, so the cast is lossless.
    raw.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE) as u8
}

fn sources_for(is_authentic: bool) -> Vec<String> {
    let sources: &[&str] = if is_authentic {
        &AUTHENTIC_SOURCES
    } else {
        &PENDING_SOURCES
    };
    sources.iter().map(|s| s.to_string()).collect()
}
