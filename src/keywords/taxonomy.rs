//! Built-in Bloom's taxonomy keyword lists.

/// Remember, understand and apply.
pub const LOTS_KEYWORDS: &[&str] = &[
    // remember
    "define",
    "list",
    "recall",
    "identify",
    "name",
    "state",
    "label",
    "match",
    "memorize",
    "repeat",
    "what is",
    "who is",
    "when did",
    "where is",
    // understand
    "describe",
    "explain",
    "summarize",
    "classify",
    "interpret",
    "paraphrase",
    "give an example of",
    // apply
    "calculate",
    "solve",
    "use",
    "demonstrate",
    "illustrate",
    "compute",
];

/// Analyze, evaluate and create.
pub const HOTS_KEYWORDS: &[&str] = &[
    // analyze
    "analyze",
    "compare and contrast",
    "differentiate",
    "examine",
    "investigate",
    "distinguish",
    "what is the relationship between",
    // evaluate
    "evaluate",
    "justify",
    "critique",
    "assess",
    "argue",
    "defend",
    "judge",
    "to what extent",
    // create
    "design",
    "create",
    "construct",
    "formulate",
    "propose",
    "develop",
    "hypothesize",
    "what would happen if",
    "why do you think",
];
