//! Classify a handful of questions with the built-in keyword lists.
//!
//! Pass a MiniLM model directory as the first argument to use real embeddings; without one
//! the hashing stub is used and labels are only illustrative.

use anyhow::Result;

use hots::{KeywordSet, MiniLmConfig, MiniLmEmbedder, QuestionClassifier, Tier};

const QUESTIONS: &[&str] = &[
    "Define photosynthesis.",
    "List the planets in the solar system.",
    "Design an experiment to test plant growth.",
    "Evaluate the causes of the First World War.",
    "",
];

fn main() -> Result<()> {
    let embedder = match std::env::args().nth(1) {
        Some(dir) => MiniLmEmbedder::load(MiniLmConfig::new(dir))?,
        None => MiniLmEmbedder::stub()?,
    };
    let classifier = QuestionClassifier::new(embedder, &KeywordSet::builtin())?;

    for question in QUESTIONS {
        let r = classifier.classify_detailed(question)?;
        println!(
            "{:<48} {} conf={:.4} lots={:.4} hots={:.4} diff={:.4}",
            format!("{question:?}"),
            r.tier,
            r.confidence,
            r.lots_score,
            r.hots_score,
            r.difference
        );
    }

    let batch = classifier.classify_batch(QUESTIONS)?;
    let hots = batch.iter().filter(|c| c.tier == Tier::Hots).count();
    println!("batch: {hots}/{} HOTS", batch.len());

    Ok(())
}
