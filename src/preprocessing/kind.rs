use serde::{Deserialize, Serialize};
use url::Url;

/// What the user pasted. Informational only; the verdict never depends on it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionKind {
    Url,
    Claim,
    Article,
}

impl SubmissionKind {
    /// Longest single-line submission still treated as a claim.
    pub const CLAIM_MAX_CHARS: usize = 280;

    pub fn detect(input: &str) -> Self {
        let trimmed = input.trim();

        if is_web_url(trimmed) {
            SubmissionKind::Url
        } else if !trimmed.contains('\n') && trimmed.chars().count() <= Self::CLAIM_MAX_CHARS {
            SubmissionKind::Claim
        } else {
            SubmissionKind::Article
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionKind::Url => "url",
            SubmissionKind::Claim => "claim",
            SubmissionKind::Article => "article",
        }
    }
}

fn is_web_url(candidate: &str) -> bool {
    if candidate.is_empty() || candidate.contains(char::is_whitespace) {
        return false;
    }

    let parsed = if candidate.starts_with("www.") {
        Url::parse(&format!("https://{}", candidate))
    } else {
        Url::parse(candidate)
    };

    parsed
        .map(|url| matches!(url.scheme(), "http" | "https") && url.host().is_some())
        .unwrap_or(false)
}
