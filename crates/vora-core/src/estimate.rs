//! Cost and turnaround estimates

use crate::types::AgentTier;

/// Baseline turnaround in minutes for the fastest tier
pub const BASE_MINUTES: f64 = 10.0;

/// Characters-to-tokens proxy
const TOKENS_PER_CHAR: f64 = 1.5;

/// Turnaround multiplier indexed by `tier - 1`
const TIER_MULTIPLIERS: [f64; 6] = [1.0, 1.5, 2.0, 3.0, 4.0, 5.0];

/// Rough token count of a task: 1.5 tokens per UTF-16 code unit of title and body
pub fn estimate_tokens(title: &str, body: &str) -> f64 {
    (title.encode_utf16().count() + body.encode_utf16().count()) as f64 * TOKENS_PER_CHAR
}

/// Cost in USD of processing `tokens` on `tier`
pub fn estimate_cost(tokens: f64, tier: &AgentTier) -> f64 {
    tokens / 1_000_000.0 * tier.cost_per_1m_tokens
}

/// Turnaround in minutes; unknown tier numbers use the baseline
pub fn estimate_time(tier: &AgentTier) -> f64 {
    let multiplier = usize::from(tier.tier)
        .checked_sub(1)
        .and_then(|idx| TIER_MULTIPLIERS.get(idx))
        .copied()
        .unwrap_or(1.0);
    BASE_MINUTES * multiplier
}
