use vora_core::Config;
use vora_telemetry::Paths;

pub fn run(force: bool) -> anyhow::Result<()> {
    let paths = Paths::new()?;
    let config_path = paths.config_file();

    if config_path.exists() && !force {
        println!(
            "Config already exists at {} (use --force to overwrite)",
            config_path.display()
        );
        return Ok(());
    }

    let json = serde_json::to_string_pretty(&Config::new())?;
    vora_telemetry::atomic_write(&config_path, json.as_bytes())?;

    println!("✓ Wrote default config to {}", config_path.display());
    println!("  Edit technical_terms, uncertainty_markers or cross_file_phrases to tune analysis,");
    println!("  or catalog to change the available tiers.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_init_writes_loadable_config() {
        let temp = tempfile::TempDir::new().unwrap();
        std::env::set_var("VORA_HOME", temp.path());
        let result = run(false);
        std::env::remove_var("VORA_HOME");
        result.unwrap();

        let content = std::fs::read_to_string(temp.path().join("vora.json")).unwrap();
        let config: Config = serde_json::from_str(&content).unwrap();
        assert_eq!(config, Config::new());
    }

    #[test]
    #[serial]
    fn test_init_keeps_existing_config() {
        let temp = tempfile::TempDir::new().unwrap();
        let config_path = temp.path().join("vora.json");
        std::fs::write(&config_path, r#"{"technical_terms":["graphql"]}"#).unwrap();

        std::env::set_var("VORA_HOME", temp.path());
        let result = run(false);
        std::env::remove_var("VORA_HOME");
        result.unwrap();

        let content = std::fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("graphql"));
    }
}
