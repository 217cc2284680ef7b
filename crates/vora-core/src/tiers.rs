//! Agent tier catalog and rank-based selection

use crate::error::CoreError;
use crate::types::AgentTier;
use serde::{Deserialize, Serialize};

/// Lowest tier number that runs at no cost
const FREE_TIER_FLOOR: u8 = 5;

fn tier(
    tier: u8,
    name: &str,
    prefix: &str,
    model: &str,
    cost_per_1m_tokens: f64,
    rank: u32,
    min_rank: u32,
) -> AgentTier {
    AgentTier {
        tier,
        name: name.to_string(),
        prefix: prefix.to_string(),
        model: model.to_string(),
        cost_per_1m_tokens,
        rank,
        min_rank,
    }
}

/// Immutable list of tiers ordered by descending `min_rank`. Never empty.
///
/// Serializes as a plain array of tiers; deserializing goes through
/// [`TierCatalog::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<AgentTier>", into = "Vec<AgentTier>")]
pub struct TierCatalog {
    tiers: Vec<AgentTier>,
}

impl TierCatalog {
    /// The six built-in tiers, Executive through Script
    pub fn standard() -> Self {
        Self {
            tiers: vec![
                tier(1, "Executive", "e", "claude-opus-4.1", 15.00, 9, 9),
                tier(2, "Manager", "m", "claude-sonnet-4.5", 3.00, 8, 7),
                tier(3, "Worker", "w", "deepseek-chat", 0.14, 6, 5),
                tier(4, "Intern", "i", "qwen-32b-vast", 0.05, 5, 4),
                tier(5, "FreeAgent", "f", "qwen-14b-local", 0.00, 4, 3),
                tier(6, "Script", "s", "bash-script", 0.00, 2, 1),
            ],
        }
    }

    /// Build a catalog from arbitrary tiers, reordering them by descending `min_rank`
    pub fn new(mut tiers: Vec<AgentTier>) -> Result<Self, CoreError> {
        if tiers.is_empty() {
            return Err(CoreError::EmptyCatalog);
        }
        tiers.sort_by(|a, b| b.min_rank.cmp(&a.min_rank));
        Ok(Self { tiers })
    }

    pub fn tiers(&self) -> &[AgentTier] {
        &self.tiers
    }

    /// First tier whose `min_rank` the target reaches, else the lowest tier
    pub fn select(&self, target_rank: u32) -> &AgentTier {
        self.tiers
            .iter()
            .find(|t| target_rank >= t.min_rank)
            .unwrap_or_else(|| self.lowest())
    }

    /// First tier in catalog order numbered 5 or above
    pub fn free_tier(&self) -> Option<&AgentTier> {
        self.tiers.iter().find(|t| t.tier >= FREE_TIER_FLOOR)
    }

    /// Least capable tier (last in catalog order)
    pub fn lowest(&self) -> &AgentTier {
        &self.tiers[self.tiers.len() - 1]
    }
}

impl Default for TierCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<AgentTier>> for TierCatalog {
    type Error = CoreError;

    fn try_from(tiers: Vec<AgentTier>) -> Result<Self, Self::Error> {
        Self::new(tiers)
    }
}

impl From<TierCatalog> for Vec<AgentTier> {
    fn from(catalog: TierCatalog) -> Self {
        catalog.tiers
    }
}
