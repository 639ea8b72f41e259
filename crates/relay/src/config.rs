//! Configuration loading for relay.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use relay_core::{ChunkingOptions, DEFAULT_INDENT_THRESHOLD};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Default, Clone)]
pub struct Config {
    pub chunking: Option<ChunkingConfig>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ChunkingConfig {
    pub indent_threshold: Option<u32>,
}

impl Config {
    /// Indent threshold from the config file, or the default (40).
    pub fn indent_threshold(&self) -> u32 {
        self.chunking
            .as_ref()
            .and_then(|chunking| chunking.indent_threshold)
            .unwrap_or(DEFAULT_INDENT_THRESHOLD)
    }

    /// Chunking options, with a command-line override taking precedence.
    pub fn chunking_options(&self, threshold_override: Option<u32>) -> ChunkingOptions {
        ChunkingOptions {
            indent_threshold: threshold_override.unwrap_or_else(|| self.indent_threshold()),
        }
    }
}

pub fn default_config_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "relay").context("Could not determine config directory")?;
    Ok(dirs.config_dir().join("config.toml"))
}

pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config =
        toml::from_str(&contents).context("Failed to parse config file as TOML")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.indent_threshold(), 40);
        assert_eq!(config.chunking_options(None), ChunkingOptions::default());
    }

    #[test]
    fn test_override_wins_over_file() {
        let config = Config {
            chunking: Some(ChunkingConfig {
                indent_threshold: Some(25),
            }),
        };
        assert_eq!(config.chunking_options(None).indent_threshold, 25);
        assert_eq!(config.chunking_options(Some(60)).indent_threshold, 60);
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let config = load_config(&dir.path().join("nope.toml")).unwrap();
        assert!(config.chunking.is_none());
    }

    #[test]
    fn test_load_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[chunking]\nindent_threshold = 55\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.indent_threshold(), 55);
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[chunking]\nindent_threshold = \"wide\"\n").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
