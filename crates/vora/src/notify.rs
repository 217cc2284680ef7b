//! Rendering of routing results for issue comments and labels

use vora_core::RoutingResult;

/// Marker label applied to every analyzed issue
pub const ANALYZED_LABEL: &str = "vora-analyzed";

/// Labels describing the assignment: tier, estimated rank, analyzed marker
pub fn assignment_labels(result: &RoutingResult) -> Vec<String> {
    vec![
        format!("tier-{}", result.agent.tier),
        format!("rank-r{}", result.analysis.estimated_rank),
        ANALYZED_LABEL.to_string(),
    ]
}

/// Markdown comment announcing the assigned agent
pub fn assignment_comment(result: &RoutingResult) -> String {
    let agent = &result.agent;
    let analysis = &result.analysis;
    let price = if agent.is_free() {
        "FREE".to_string()
    } else {
        format!("${}/1M tokens", agent.cost_per_1m_tokens)
    };

    format!(
        "## VORA Agent Assignment\n\
         \n\
         **Agent Selected**: {name} (Tier {tier})\n\
         **Agent ID**: `{agent_id}`\n\
         **Model**: {model}\n\
         \n\
         ### Complexity Analysis\n\
         \n\
         - **Shannon Entropy**: {entropy:.2}\n\
         - **Estimated Rank**: R{rank}\n\
         - **Technical Terms**: {technical}\n\
         - **Uncertainty Markers**: {uncertainty}\n\
         \n\
         ### Reasoning\n\
         \n\
         {reasoning}\n\
         \n\
         ### Estimates\n\
         \n\
         - **Cost**: ${cost:.4} ({price})\n\
         - **Time**: ~{time:.0} minutes\n\
         \n\
         ---\n\
         \n\
         **Next Steps**: The agent will begin work shortly. You can track progress in this issue.\n\
         \n\
         *Powered by VORA Router - Shannon entropy-based task routing*",
        name = agent.name,
        tier = agent.tier,
        agent_id = result.agent_id,
        model = agent.model,
        entropy = analysis.entropy,
        rank = analysis.estimated_rank,
        technical = analysis.technical_count,
        uncertainty = analysis.uncertainty_count,
        reasoning = result.reasoning,
        cost = result.cost_estimate,
        price = price,
        time = result.time_estimate,
    )
}
