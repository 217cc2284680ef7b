pub mod history;
pub mod init;
pub mod route;
pub mod tiers;
pub mod version;
pub mod webhook;

use anyhow::Context;
use std::io::Read;
use std::path::Path;
use tracing::warn;
use vora_core::{Config, Router};
use vora_telemetry::{Paths, RoutingRecord};

/// Config file contents; missing, unreadable or malformed config means defaults
fn load_config(config_path: &Path) -> Config {
    if !config_path.exists() {
        return Config::new();
    }

    let content = match std::fs::read_to_string(config_path) {
        Ok(c) => c,
        Err(err) => {
            warn!(path = %config_path.display(), %err, "unreadable config, using defaults");
            return Config::new();
        }
    };

    match serde_json::from_str::<Config>(&content) {
        Ok(config) => config,
        Err(err) => {
            warn!(path = %config_path.display(), %err, "malformed config, using defaults");
            Config::new()
        }
    }
}

pub fn load_router(paths: &Paths) -> anyhow::Result<Router> {
    let config = load_config(&paths.config_file());
    Router::new(config).context("failed to build router from config")
}

/// Contents of `source`, or stdin when it is absent or "-"
fn read_input(source: Option<&str>) -> anyhow::Result<String> {
    match source {
        Some(path) if path != "-" => {
            std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))
        }
        _ => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            Ok(input)
        }
    }
}

fn record_decision(paths: &Paths, record: &RoutingRecord) -> anyhow::Result<()> {
    let history = paths.history_file();
    vora_telemetry::append_jsonl(&history, record)
        .with_context(|| format!("failed to record decision in {}", history.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = load_config(&dir.path().join("vora.json"));
        assert_eq!(config, Config::new());
    }

    #[test]
    fn test_malformed_config_uses_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("vora.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_config(&path), Config::new());

        // An empty catalog is rejected as a whole
        std::fs::write(&path, r#"{"catalog":[]}"#).unwrap();
        assert_eq!(load_config(&path), Config::new());
    }

    #[test]
    fn test_config_overrides_catalog() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("vora.json"),
            r#"{"catalog":[{"tier":1,"name":"Solo","prefix":"s","model":"one-model",
                "costPer1MTokens":2.0,"rank":5,"minRank":1}]}"#,
        )
        .unwrap();

        let router = load_router(&Paths::at(dir.path())).unwrap();
        assert_eq!(router.catalog().tiers().len(), 1);
        let result = router.route("x", "", &vora_core::RoutingOptions::default());
        assert_eq!(result.agent.name, "Solo");
        assert_eq!(result.agent_id, "a-s-worker_v1.0-one_20251105-r5");
    }

    #[test]
    fn test_config_overrides_vocabulary() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("vora.json"),
            r#"{"technical_terms":["graphql","grpc","protobuf","schema","resolver","federation"]}"#,
        )
        .unwrap();

        let router = load_router(&Paths::at(dir.path())).unwrap();
        let signals = router.analyze("Add graphql federation", "grpc protobuf schema resolver");
        assert_eq!(signals.technical_count, 6);
        assert_eq!(signals.estimated_rank, 9);

        // Built-in terms no longer count
        assert_eq!(router.analyze("oauth", "").technical_count, 0);
    }

    #[test]
    fn test_read_input_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("event.json");
        std::fs::write(&path, "{}").unwrap();
        assert_eq!(read_input(path.to_str()).unwrap(), "{}");
        assert!(read_input(Some("/nonexistent/vora/event.json")).is_err());
    }
}
