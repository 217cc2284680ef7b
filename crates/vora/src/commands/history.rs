use std::collections::BTreeMap;
use vora_telemetry::{read_jsonl, Paths, RoutingRecord};

fn compute_stats(records: &[RoutingRecord]) -> String {
    if records.is_empty() {
        return "No routing decisions to analyze.".to_string();
    }
    let total = records.len();
    let avg_entropy = records.iter().map(|r| r.entropy).sum::<f64>() / total as f64;
    let total_cost: f64 = records.iter().map(|r| r.cost_estimate).sum();
    let total_minutes: f64 = records.iter().map(|r| r.time_estimate).sum();

    let mut by_tier: BTreeMap<u8, (String, usize)> = BTreeMap::new();
    for r in records {
        by_tier
            .entry(r.tier)
            .or_insert_with(|| (r.agent.clone(), 0))
            .1 += 1;
    }

    let mut lines = vec![
        format!("Total decisions: {}", total),
        format!("Avg entropy: {:.2}", avg_entropy),
        format!("Total estimated cost: ${:.4}", total_cost),
        format!("Total estimated time: {:.0} minutes", total_minutes),
        "By tier:".to_string(),
    ];
    for (tier, (agent, count)) in &by_tier {
        lines.push(format!(
            "  Tier {} {}: {} ({:.0}%)",
            tier,
            agent,
            count,
            *count as f64 / total as f64 * 100.0
        ));
    }
    lines.join("\n")
}

fn recent(records: &[RoutingRecord], limit: usize) -> Vec<&RoutingRecord> {
    records.iter().rev().take(limit).collect()
}

pub fn run(stats: bool, limit: usize) -> anyhow::Result<()> {
    let paths = Paths::new()?;
    let records: Vec<RoutingRecord> = read_jsonl(&paths.history_file())?;

    if records.is_empty() {
        println!("No routing history");
        return Ok(());
    }

    if stats {
        println!("{}", compute_stats(&records));
        return Ok(());
    }

    let display = recent(&records, limit);
    println!("Recent Decisions (last {})", display.len());
    println!("=========================");
    for r in &display {
        let issue = r.issue.map(|n| format!("#{n} ")).unwrap_or_default();
        println!(
            "  {} | {}{} -> {} (T{}, R{}) ${:.4} ~{:.0}m",
            r.timestamp.format("%Y-%m-%d %H:%M"),
            issue,
            r.title,
            r.agent,
            r.tier,
            r.estimated_rank,
            r.cost_estimate,
            r.time_estimate,
        );
    }
    Ok(())
}
