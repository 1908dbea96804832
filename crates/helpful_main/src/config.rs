use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::cli::Cli;

/// Logger settings, read from JSON and overridden by command-line flags.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub level: String,
    pub destination: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self { level: "DEBUG".to_string(), destination: None }
    }
}

impl Config {
    pub fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    pub fn resolve(cli: &Cli) -> Result<Self> {
        let base = match &cli.config {
            Some(path) => Self::read(path)?,
            None => Self::default(),
        };
        Ok(base.with_overrides(cli))
    }

    fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(level) = &cli.level {
            self.level = level.clone();
        }
        if let Some(file) = &cli.file {
            self.destination = Some(file.clone());
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_missing_fields_take_defaults() {
        let actual: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(actual, Config::default());
    }

    #[test]
    fn test_read_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("log.json");
        std::fs::write(&path, r#"{"level": "ERROR", "destination": "/var/log/app.log"}"#).unwrap();

        let actual = Config::read(&path).unwrap();
        let expected = Config {
            level: "ERROR".to_string(),
            destination: Some(PathBuf::from("/var/log/app.log")),
        };
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_flags_override_file_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("log.json");
        std::fs::write(&path, r#"{"level": "ERROR"}"#).unwrap();
        let path_arg = path.display().to_string();
        let cli = Cli::parse_from(["helpful", "INFO", "x", "-c", &path_arg, "-l", "INFO"]);

        let actual = Config::resolve(&cli).unwrap();
        assert_eq!(actual.level, "INFO");
        assert_eq!(actual.destination, None);
    }

    #[test]
    fn test_unreadable_config_names_the_file() {
        let cli = Cli::parse_from(["helpful", "INFO", "x", "-c", "/nonexistent/log.json"]);
        let actual = Config::resolve(&cli).unwrap_err();
        assert!(actual.to_string().contains("/nonexistent/log.json"));
    }
}
