pub fn run() -> anyhow::Result<()> {
    println!("vora {}", env!("CARGO_PKG_VERSION"));
    println!("Shannon entropy-based task routing for tiered agents");
    println!("  - 6-tier agent catalog (T1-T6)");
    println!("  - Shannon entropy analysis");
    println!("  - Technical complexity and uncertainty detection");
    println!("  - Manual rank and cost tolerance overrides");
    Ok(())
}
