//! Configuration for complexity routing

use crate::tiers::TierCatalog;
use serde::{Deserialize, Serialize};

const TECHNICAL_TERMS: &[&str] = &[
    "oauth",
    "pkce",
    "jwt",
    "webhook",
    "api",
    "authentication",
    "authorization",
    "encryption",
    "database",
    "migration",
    "refactor",
    "architecture",
    "distributed",
    "concurrency",
    "async",
    "race condition",
    "terraform",
    "kubernetes",
    "docker",
    "ci/cd",
    "deployment",
    "infrastructure",
];

const UNCERTAINTY_MARKERS: &[&str] = &[
    "maybe",
    "not sure",
    "investigate",
    "figure out",
    "explore",
    "unclear",
    "complex",
    "difficult",
    "how to",
    "why",
    "what if",
];

const CROSS_FILE_PHRASES: &[&str] = &["multiple files", "across files", "refactor", "migrate"];

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Phrase tables driving signal extraction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    /// Domain terms; each one present in the text counts once
    pub technical_terms: Vec<String>,
    /// Hedging phrases; each one present in the text counts once
    pub uncertainty_markers: Vec<String>,
    /// Phrases whose every occurrence counts as a cross-file dependency
    pub cross_file_phrases: Vec<String>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self {
            technical_terms: owned(TECHNICAL_TERMS),
            uncertainty_markers: owned(UNCERTAINTY_MARKERS),
            cross_file_phrases: owned(CROSS_FILE_PHRASES),
        }
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new()
    }
}

/// Router configuration. Vocabulary keys sit at the top level next to an
/// optional `catalog` array; anything missing keeps its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(flatten)]
    pub vocabulary: Vocabulary,
    pub catalog: TierCatalog,
}

impl Config {
    pub fn new() -> Self {
        Self {
            vocabulary: Vocabulary::new(),
            catalog: TierCatalog::standard(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
