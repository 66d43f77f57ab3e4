//! Configuration management for the ATS screener

use crate::error::{Result, ScreenerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub filter: FilterConfig,
    pub matching: MatchConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Full experience span offered by the range control; selecting
    /// the whole span means "no constraint".
    pub experience_min: f64,
    pub experience_max: f64,
}

impl FilterConfig {
    pub fn experience_span(&self) -> (f64, f64) {
        (self.experience_min, self.experience_max)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Matches shown when the user does not pass a limit.
    pub default_limit: i64,
    /// Hard ceiling on how many matches a projection may return.
    pub max_limit: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            filter: FilterConfig {
                experience_min: 0.0,
                experience_max: 20.0,
            },
            matching: MatchConfig {
                default_limit: 10,
                max_limit: 100,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    /// Loads the explicit file when given, otherwise the default
    /// location, writing defaults there on first run.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            let content = std::fs::read_to_string(path)?;
            return toml::from_str(&content).map_err(|e| {
                ScreenerError::Configuration(format!("Failed to parse config: {}", e))
            });
        }

        let config_path = Self::config_path();
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                ScreenerError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ScreenerError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("ats-screener")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_ui_conventions() {
        let config = Config::default();
        assert_eq!(config.filter.experience_span(), (0.0, 20.0));
        assert_eq!(config.matching.default_limit, 10);
        assert_eq!(config.matching.max_limit, 100);
        assert_eq!(config.output.format, OutputFormat::Console);
    }

    #[test]
    fn toml_round_trip() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back.matching.max_limit, config.matching.max_limit);
        assert_eq!(
            back.filter.experience_span(),
            config.filter.experience_span()
        );
    }

    #[test]
    fn explicit_config_file_is_honored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();
        config.matching.default_limit = 25;
        std::fs::write(&path, toml::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded.matching.default_limit, 25);
    }
}
