use serde::{Deserialize, Serialize};

use crate::constants::EMPTY_INPUT_SCORE;

/// Cognitive-difficulty tier of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tier {
    /// Lower-order thinking skills (remember, understand, apply).
    Lots,
    /// Higher-order thinking skills (analyze, evaluate, create).
    Hots,
}

impl Tier {
    pub const ALL: [Tier; 2] = [Tier::Lots, Tier::Hots];

    /// HOTS only when its score is strictly greater; ties go to LOTS.
    pub fn decide(lots_score: f32, hots_score: f32) -> Self {
        if hots_score > lots_score {
            Tier::Hots
        } else {
            Tier::Lots
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Lots => "LOTS",
            Tier::Hots => "HOTS",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label plus the winning tier's score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    #[serde(rename = "classification")]
    pub tier: Tier,
    pub confidence: f32,
}

impl Classification {
    pub fn from_scores(lots_score: f32, hots_score: f32) -> Self {
        let tier = Tier::decide(lots_score, hots_score);
        let confidence = match tier {
            Tier::Lots => lots_score,
            Tier::Hots => hots_score,
        };
        Self { tier, confidence }
    }

    /// Result for input with no text to embed.
    pub fn empty_input() -> Self {
        Self::from(ClassificationResult::empty_input())
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (confidence: {:.4})", self.tier, self.confidence)
    }
}

/// Full classification record with both tier scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    #[serde(rename = "classification")]
    pub tier: Tier,
    /// `max(lots_score, hots_score)`.
    pub confidence: f32,
    pub lots_score: f32,
    pub hots_score: f32,
    /// `|hots_score - lots_score|`.
    pub difference: f32,
}

impl ClassificationResult {
    pub fn from_scores(lots_score: f32, hots_score: f32) -> Self {
        Self {
            tier: Tier::decide(lots_score, hots_score),
            confidence: lots_score.max(hots_score),
            lots_score,
            hots_score,
            difference: (hots_score - lots_score).abs(),
        }
    }

    /// Empty or whitespace-only input: both tiers at 0.5, resolved to LOTS.
    pub fn empty_input() -> Self {
        Self::from_scores(EMPTY_INPUT_SCORE, EMPTY_INPUT_SCORE)
    }

    pub fn is_hots(&self) -> bool {
        self.tier == Tier::Hots
    }
}

impl From<ClassificationResult> for Classification {
    fn from(result: ClassificationResult) -> Self {
        Self::from_scores(result.lots_score, result.hots_score)
    }
}

impl std::fmt::Display for ClassificationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (confidence: {:.4}, lots: {:.4}, hots: {:.4}, difference: {:.4})",
            self.tier, self.confidence, self.lots_score, self.hots_score, self.difference
        )
    }
}

/// Returns `true` when `text` has nothing to embed.
pub(crate) fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
