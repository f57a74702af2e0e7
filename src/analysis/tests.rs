use super::*;
use std::sync::Arc;
use std::time::Instant;

const CREDIBLE_REASONING: &str =
    "Contains credible language patterns and appears to reference authoritative sources.";
const SENSATIONAL_REASONING: &str = "Contains sensationalized language patterns commonly found in misinformation. Lacks credible source citations.";
const NEUTRAL_REASONING: &str = "Analysis based on content patterns and language indicators.";

fn pinned(offset: i32) -> HeuristicClassifier {
    HeuristicClassifier::new(Arc::new(FixedOffset(offset))).unwrap()
}

struct BrokenOffsets;

impl OffsetSource for BrokenOffsets {
    fn draw(&self) -> AnalysisResult<i32> {
        Err(AnalysisError::ClassificationFailure {
            reason: "entropy service unavailable".to_string(),
        })
    }
}

#[test]
fn suspicious_without_reliable_is_misleading() {
    let result = pinned(0)
        .classify("SHOCKING secret government miracle cure they don't want you to know!")
        .unwrap();

    assert!(!result.is_authentic);
    assert_eq!(result.confidence, 85);
    assert_eq!(result.reasoning, SENSATIONAL_REASONING);
    assert_eq!(result.sources, vec!["Fact-check pending"]);
    assert_eq!(result.label(), "Potentially Misleading");
}

#[test]
fn reliable_phrasing_is_credible() {
    let result = pinned(0)
        .classify("According to researchers, the study shows promising results.")
        .unwrap();

    assert!(result.is_authentic);
    assert_eq!(result.confidence, 90);
    assert_eq!(result.reasoning, CREDIBLE_REASONING);
    assert_eq!(result.sources, vec!["Reuters", "AP News", "BBC"]);
    assert_eq!(result.label(), "Likely Authentic");
}

#[test]
fn reliable_wins_over_suspicious_regardless_of_case() {
    let result = pinned(0)
        .classify("SHOCKING new STUDY SHOWS coffee is fine")
        .unwrap();

    assert!(result.is_authentic);
    assert_eq!(result.confidence, 90);
    assert_eq!(result.reasoning, CREDIBLE_REASONING);
}

#[test]
fn no_phrases_is_neutral() {
    let result = pinned(0).classify("The weather today is mild.").unwrap();

    assert!(result.is_authentic);
    assert_eq!(result.confidence, 75);
    assert_eq!(result.reasoning, NEUTRAL_REASONING);
    assert_eq!(result.sources, vec!["Reuters", "AP News", "BBC"]);
}

#[test]
fn offset_is_added_then_clamped() {
    // Credible base 90 saturates at 95 for offsets above +5.
    assert_eq!(pinned(9).classify("expert says so").unwrap().confidence, 95);
    assert_eq!(pinned(5).classify("expert says so").unwrap().confidence, 95);
    assert_eq!(pinned(4).classify("expert says so").unwrap().confidence, 94);
    assert_eq!(pinned(-10).classify("expert says so").unwrap().confidence, 80);

    assert_eq!(pinned(-10).classify("unbelievable").unwrap().confidence, 75);
    assert_eq!(pinned(-10).classify("plain text").unwrap().confidence, 65);
}

#[test]
fn confidence_bounds_hold_for_every_offset_and_branch() {
    let inputs = [
        "shocking",
        "official statement",
        "shocking official statement",
        "nothing to see",
    ];

    for offset in OFFSET_RANGE {
        let classifier = pinned(offset);
        for input in inputs {
            let result = classifier.classify(input).unwrap();
            assert!(
                (60..=95).contains(&result.confidence),
                "offset {} on {:?} gave {}",
                offset,
                input,
                result.confidence
            );
            assert!(!result.sources.is_empty());
            assert_eq!(result.is_authentic, result.sources.len() == 3);
        }
    }
}

#[test]
fn seeded_classifiers_agree() {
    let a = HeuristicClassifier::seeded(2024).unwrap();
    let b = HeuristicClassifier::seeded(2024).unwrap();

    for _ in 0..50 {
        assert_eq!(
            a.classify("research indicates a trend").unwrap(),
            b.classify("research indicates a trend").unwrap()
        );
    }
}

#[test]
fn original_casing_is_untouched() {
    let text = "OFFICIAL STATEMENT from the Ministry";
    let result = pinned(0).classify(text).unwrap();

    assert!(result.is_authentic);
    assert_eq!(text, "OFFICIAL STATEMENT from the Ministry");
}

#[test]
fn strict_rejects_blank_input() {
    let classifier = pinned(0);

    assert!(matches!(
        classifier.classify_strict("   \n\t"),
        Err(AnalysisError::InvalidInput)
    ));
    assert!(classifier.classify_strict("hello").is_ok());
}

#[test]
fn failing_offset_source_surfaces_classification_failure() {
    let classifier = HeuristicClassifier::new(Arc::new(BrokenOffsets)).unwrap();

    let err = classifier.classify("anything").unwrap_err();
    assert!(matches!(err, AnalysisError::ClassificationFailure { .. }));
    assert!(err.to_string().contains("entropy service unavailable"));
}

#[test]
fn out_of_range_offset_is_rejected() {
    let err = pinned(10).classify("anything").unwrap_err();
    assert!(matches!(err, AnalysisError::ClassificationFailure { .. }));
}

#[test]
fn undelayed_analyzer_resolves_immediately() {
    let classifier = pinned(0);
    let result = tokio_test::block_on(classifier.analyze("study shows")).unwrap();

    assert_eq!(result.confidence, 90);
    assert_eq!(classifier.name(), "heuristic");
}

#[tokio::test]
async fn delayed_analyzer_waits_before_answering() {
    let analyzer = DelayedAnalyzer::new(pinned(0), Latency::from_millis(30));
    let start = Instant::now();

    let result = analyzer.analyze("miracle cure").await.unwrap();

    assert!(start.elapsed() >= analyzer.latency().duration());
    assert!(!result.is_authentic);
}

#[tokio::test]
async fn concurrent_requests_are_independent() {
    let analyzer = Arc::new(DelayedAnalyzer::new(pinned(0), Latency::from_millis(5)));

    let (a, b) = tokio::join!(
        analyzer.analyze("shocking"),
        analyzer.analyze("according to the report")
    );

    assert!(!a.unwrap().is_authentic);
    assert!(b.unwrap().is_authentic);
}
