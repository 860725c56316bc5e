//! End-to-end classification through the public API.

mod common;

use std::sync::Arc;

use common::{VocabEmbedder, scenario_keywords};
use hots::constants::SCORE_TOLERANCE;
use hots::{
    AnchorError, ClassificationResult, ClassifierError, KeywordError, KeywordSet, MiniLmEmbedder,
    MockEmbedder, QuestionClassifier, Tier,
};

fn scenario_classifier() -> QuestionClassifier<VocabEmbedder> {
    QuestionClassifier::new(VocabEmbedder::for_scenario(), &scenario_keywords()).unwrap()
}

#[test]
fn test_define_question_is_lots() {
    let classifier = scenario_classifier();
    let result = classifier.classify_detailed("Define photosynthesis.").unwrap();

    assert_eq!(result.tier, Tier::Lots);
    assert!(result.lots_score > result.hots_score);
    assert_eq!(classifier.classify("Define photosynthesis.").unwrap().tier, Tier::Lots);
}

#[test]
fn test_design_question_is_hots() {
    let classifier = scenario_classifier();
    let result = classifier
        .classify_detailed("Design an experiment to test plant growth.")
        .unwrap();

    assert_eq!(result.tier, Tier::Hots);
    assert!(result.hots_score > result.lots_score);
    assert_eq!(result.confidence, result.hots_score);
}

#[test]
fn test_multi_word_anchors_match() {
    let classifier = scenario_classifier();

    let recall = classifier.classify("What is the capital of France?").unwrap();
    assert_eq!(recall.tier, Tier::Lots);

    let analysis = classifier
        .classify("Compare and contrast the French and American revolutions.")
        .unwrap();
    assert_eq!(analysis.tier, Tier::Hots);
}

#[test]
fn test_blank_inputs_for_any_anchor_set() {
    let expected = ClassificationResult {
        tier: Tier::Lots,
        confidence: 0.5,
        lots_score: 0.5,
        hots_score: 0.5,
        difference: 0.0,
    };

    let scenario = scenario_classifier();
    let builtin =
        QuestionClassifier::new(MiniLmEmbedder::stub().unwrap(), &KeywordSet::builtin()).unwrap();

    for text in ["", "   "] {
        assert_eq!(scenario.classify_detailed(text).unwrap(), expected);
        assert_eq!(builtin.classify_detailed(text).unwrap(), expected);
    }
}

#[test]
fn test_batch_matches_single_calls() {
    let classifier = scenario_classifier();
    let texts = [
        "Define photosynthesis.",
        "Design an experiment to test plant growth.",
        "List the noble gases.",
        "Evaluate the evidence for climate change.",
        "Unrelated words only.",
    ];

    let batch = classifier.classify_batch(&texts).unwrap();
    assert_eq!(batch.len(), texts.len());

    for (i, text) in texts.iter().enumerate() {
        let single = classifier.classify(text).unwrap();
        assert_eq!(batch[i].tier, single.tier, "{text}");
        assert!((batch[i].confidence - single.confidence).abs() < SCORE_TOLERANCE);
    }
}

#[test]
fn test_empty_batch_is_empty() {
    assert!(scenario_classifier().classify_batch(&[]).unwrap().is_empty());
}

#[test]
fn test_result_invariants_hold() {
    let classifier = scenario_classifier();
    for text in [
        "Define photosynthesis.",
        "Design an experiment to test plant growth.",
        "Unrelated words only.",
    ] {
        let r = classifier.classify_detailed(text).unwrap();
        assert_eq!(r.tier == Tier::Hots, r.hots_score > r.lots_score);
        assert_eq!(r.difference, (r.hots_score - r.lots_score).abs());
        assert_eq!(r.confidence, r.lots_score.max(r.hots_score));
    }
}

#[test]
fn test_no_overlap_ties_to_lots() {
    let result = scenario_classifier()
        .classify_detailed("Unrelated words only.")
        .unwrap();
    assert_eq!(result.lots_score, 0.0);
    assert_eq!(result.hots_score, 0.0);
    assert_eq!(result.tier, Tier::Lots);
}

#[test]
fn test_empty_tier_refuses_to_build() {
    let keywords = KeywordSet::new(["define", "list"], Vec::<String>::new());
    let err = QuestionClassifier::new(VocabEmbedder::for_scenario(), &keywords).unwrap_err();

    assert!(matches!(
        err,
        ClassifierError::Anchors(AnchorError::Keywords(KeywordError::EmptyTier {
            tier: Tier::Hots
        }))
    ));
}

#[test]
fn test_keyword_file_round_trip_through_classifier() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("keywords.json");
    std::fs::write(
        &path,
        serde_json::to_string(&scenario_keywords()).unwrap(),
    )
    .unwrap();

    let keywords = KeywordSet::from_json_file(&path).unwrap();
    let classifier = QuestionClassifier::new(VocabEmbedder::for_scenario(), &keywords).unwrap();
    assert_eq!(
        classifier.classify("Define photosynthesis.").unwrap().tier,
        Tier::Lots
    );
}

#[test]
fn test_mock_provider_failure_surfaces() {
    let embedder = MockEmbedder::new(4).failing_on("Explode.");
    let classifier = QuestionClassifier::new(embedder, &scenario_keywords()).unwrap();

    assert!(matches!(
        classifier.classify("Explode."),
        Err(ClassifierError::Embedding(_))
    ));
    assert!(classifier.classify("Fine.").is_ok());
}

#[test]
fn test_concurrent_callers_share_anchors() {
    let classifier = Arc::new(scenario_classifier());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let classifier = Arc::clone(&classifier);
            std::thread::spawn(move || {
                let text = if i % 2 == 0 {
                    "Define photosynthesis."
                } else {
                    "Design an experiment to test plant growth."
                };
                classifier.classify(text).unwrap().tier
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let expected = if i % 2 == 0 { Tier::Lots } else { Tier::Hots };
        assert_eq!(handle.join().unwrap(), expected);
    }
}
