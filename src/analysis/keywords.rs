//! Phrase vocabularies and the matcher that scans a submission for them.

use regex::RegexSet;

/// Sensationalist phrasing commonly seen in misinformation.
pub const SUSPICIOUS: [&str; 5] = [
    "shocking",
    "unbelievable",
    "miracle cure",
    "secret government",
    "they don't want you to know",
];

/// Attribution phrasing that points at a source.
pub const RELIABLE: [&str; 5] = [
    "according to",
    "study shows",
    "research indicates",
    "expert says",
    "official statement",
];

/// Which phrases of each vocabulary occur in a submission, in vocabulary order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhraseHits {
    pub suspicious: Vec<&'static str>,
    pub reliable: Vec<&'static str>,
}

impl PhraseHits {
    pub fn has_suspicious(&self) -> bool {
        !self.suspicious.is_empty()
    }

    pub fn has_reliable(&self) -> bool {
        !self.reliable.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    suspicious: RegexSet,
    reliable: RegexSet,
}

impl KeywordMatcher {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            suspicious: literal_set(&SUSPICIOUS)?,
            reliable: literal_set(&RELIABLE)?,
        })
    }

    /// Plain substring matching against a lowercased copy of `text`.
    /// The submission itself is never rewritten.
    pub fn scan(&self, text: &str) -> PhraseHits {
        let normalized = text.to_lowercase();

        PhraseHits {
            suspicious: collect_hits(&self.suspicious, &SUSPICIOUS, &normalized),
            reliable: collect_hits(&self.reliable, &RELIABLE, &normalized),
        }
    }
}

fn literal_set(phrases: &[&str]) -> Result<RegexSet, regex::Error> {
    RegexSet::new(phrases.iter().map(|phrase| regex::escape(phrase)))
}

fn collect_hits(set: &RegexSet, phrases: &[&'static str], text: &str) -> Vec<&'static str> {
    set.matches(text)
        .into_iter()
        .filter_map(|index| phrases.get(index).copied())
        .collect()
}
