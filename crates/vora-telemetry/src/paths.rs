//! Location of the router's home directory and files

use std::path::{Path, PathBuf};

/// Environment variable overriding the home directory
pub const HOME_ENV: &str = "VORA_HOME";

/// Resolves the files the CLI reads and writes
#[derive(Debug, Clone)]
pub struct Paths {
    pub home: PathBuf,
}

impl Paths {
    /// `$VORA_HOME` if set and non-empty, else `~/.vora`
    pub fn new() -> std::io::Result<Self> {
        if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::at(home));
        }

        let home = dirs::home_dir().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "home directory not found")
        })?;
        Ok(Self::at(home.join(".vora")))
    }

    pub fn at(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    /// Vocabulary overrides
    pub fn config_file(&self) -> PathBuf {
        self.home.join("vora.json")
    }

    /// Recorded routing decisions
    pub fn history_file(&self) -> PathBuf {
        self.home.join("routings.jsonl")
    }

    pub fn home(&self) -> &Path {
        &self.home
    }
}
