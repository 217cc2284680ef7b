//! Core types for complexity routing

use serde::{Deserialize, Serialize};

/// An execution tier an incoming task can be assigned to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentTier {
    /// Tier number, 1 (most capable) to 6 (least capable)
    pub tier: u8,
    pub name: String,
    /// Single-character prefix used in agent identifiers
    pub prefix: String,
    pub model: String,
    #[serde(rename = "costPer1MTokens")]
    pub cost_per_1m_tokens: f64,
    pub rank: u32,
    /// Lowest target rank this tier accepts
    pub min_rank: u32,
}

impl AgentTier {
    /// Model family: the model name up to its first hyphen
    pub fn model_family(&self) -> &str {
        self.model.split('-').next().unwrap_or(&self.model)
    }

    pub fn is_free(&self) -> bool {
        self.cost_per_1m_tokens <= 0.0
    }
}

/// Lexical complexity signals extracted from a task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexitySignals {
    /// Shannon entropy (bits) of the token distribution
    pub entropy: f64,
    pub technical_count: usize,
    pub uncertainty_count: usize,
    /// Cross-file phrase occurrences (reported, not used for ranking)
    pub cross_file_deps: usize,
    /// One of 2, 3, 5, 7, 9
    pub estimated_rank: u32,
}

/// Outcome of routing a single task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingResult {
    pub agent: AgentTier,
    pub analysis: ComplexitySignals,
    pub reasoning: String,
    /// Estimated cost in USD
    pub cost_estimate: f64,
    /// Estimated duration in minutes
    pub time_estimate: f64,
    pub agent_id: String,
}
