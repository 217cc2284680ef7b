//! Human-readable routing explanations and agent identifiers

use crate::rank::RankBand;
use crate::types::{AgentTier, ComplexitySignals};

/// Reasoning attached when a free-only cost constraint overrides routing
pub const FREE_ONLY_REASONING: &str = "Cost constraint: free only";

/// Release stamp embedded in every agent identifier
const AGENT_RELEASE: &str = "20251105";

fn band_sentence(band: RankBand) -> &'static str {
    match band {
        RankBand::Critical => "Critical/novel task requiring top-tier reasoning",
        RankBand::Complex => "Complex task with architectural implications",
        RankBand::Standard => "Standard feature/fix with moderate complexity",
        RankBand::Simple => "Simple task with clear requirements",
        RankBand::Trivial => "Trivial task suitable for basic execution",
    }
}

/// Explain an analysis: rank band, then technical load, then uncertainty
pub fn reasoning(analysis: &ComplexitySignals) -> String {
    let band = RankBand::from_rank(analysis.estimated_rank);
    let mut reasons = vec![band_sentence(band).to_string()];

    if analysis.technical_count > 3 {
        reasons.push(format!(
            "High technical complexity ({} technical terms)",
            analysis.technical_count
        ));
    }

    if analysis.uncertainty_count > 0 {
        reasons.push(format!(
            "Uncertainty present ({} markers)",
            analysis.uncertainty_count
        ));
    }

    reasons.join(". ")
}

/// `a-{prefix}-worker_v1.0-{family}_{release}-r{rank}`
pub fn agent_id(tier: &AgentTier) -> String {
    format!(
        "a-{}-worker_v1.0-{}_{}-r{}",
        tier.prefix,
        tier.model_family(),
        AGENT_RELEASE,
        tier.rank
    )
}
