use super::load_router;
use vora_core::{agent_id, estimate_time, TierCatalog};
use vora_telemetry::Paths;

fn render(catalog: &TierCatalog) -> String {
    let mut lines = vec![
        format!(
            "{:<5} {:<10} {:<18} {:>9} {:>5} {:>8} {:>6}  {}",
            "Tier", "Name", "Model", "$/1M", "Rank", "MinRank", "ETA", "Agent ID"
        ),
        "=".repeat(100),
    ];

    for tier in catalog.tiers() {
        lines.push(format!(
            "{:<5} {:<10} {:<18} {:>9.2} {:>5} {:>8} {:>5.0}m  {}",
            tier.tier,
            tier.name,
            tier.model,
            tier.cost_per_1m_tokens,
            tier.rank,
            tier.min_rank,
            estimate_time(tier),
            agent_id(tier)
        ));
    }
    lines.join("\n")
}

/// Print the catalog the router would use, including any configured override
pub fn run() -> anyhow::Result<()> {
    let router = load_router(&Paths::new()?)?;
    println!("{}", render(router.catalog()));
    Ok(())
}
