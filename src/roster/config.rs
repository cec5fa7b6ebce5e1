use crate::error::{RosterError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA: &str = "students.json";
const DEFAULT_OUTPUT: &str = "term";

pub const CONFIG_DIR_ENV: &str = "ROSTER_CONFIG_DIR";
pub const DATA_ENV: &str = "ROSTER_DATA";

/// Output formats the CLI knows how to render.
pub const OUTPUT_FORMATS: [&str; 3] = ["term", "json", "html"];

/// Configuration for roster, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterConfig {
    /// Roster resource: a file path or an http(s) URL
    #[serde(default = "default_data")]
    pub data: String,

    /// Default output format (term, json or html)
    #[serde(default = "default_output")]
    pub output: String,
}

fn default_data() -> String {
    DEFAULT_DATA.to_string()
}

fn default_output() -> String {
    DEFAULT_OUTPUT.to_string()
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            data: default_data(),
            output: default_output(),
        }
    }
}

impl RosterConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        serde_json::from_str(&content)
            .map_err(|e| RosterError::Config(format!("{}: {}", config_path.display(), e)))
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| RosterError::Config(e.to_string()))?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<&str> {
        match key {
            "data" => Ok(&self.data),
            "output" => Ok(&self.output),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "data" => {
                if value.trim().is_empty() {
                    return Err(RosterError::Config("data cannot be empty".to_string()));
                }
                self.data = value.to_string();
            }
            "output" => {
                let lowered = value.to_lowercase();
                if !OUTPUT_FORMATS.contains(&lowered.as_str()) {
                    return Err(RosterError::Config(format!(
                        "Unknown output format '{}' (expected one of: {})",
                        value,
                        OUTPUT_FORMATS.join(", ")
                    )));
                }
                self.output = lowered;
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }

    /// Data location after applying `$ROSTER_DATA` and an explicit override, in that order.
    pub fn resolve_data(&self, explicit: Option<&str>) -> String {
        explicit
            .map(str::to_string)
            .or_else(|| std::env::var(DATA_ENV).ok().filter(|v| !v.is_empty()))
            .unwrap_or_else(|| self.data.clone())
    }
}

fn unknown_key(key: &str) -> RosterError {
    RosterError::Config(format!("Unknown config key: {} (expected data or output)", key))
}

/// Where `config.json` lives: `$ROSTER_CONFIG_DIR`, else the platform config dir.
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    directories::ProjectDirs::from("com", "roster", "roster")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| RosterError::Config("Could not determine config dir".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RosterConfig::default();
        assert_eq!(config.data, "students.json");
        assert_eq!(config.output, "term");
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = RosterConfig::load(temp_dir.path().join("absent")).unwrap();
        assert_eq!(config, RosterConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join("nested");

        let mut config = RosterConfig::default();
        config.set("data", "https://example.com/students.json").unwrap();
        config.set("output", "JSON").unwrap();
        config.save(&dir).unwrap();

        let loaded = RosterConfig::load(&dir).unwrap();
        assert_eq!(loaded.data, "https://example.com/students.json");
        assert_eq!(loaded.output, "json");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), r#"{"output":"html"}"#).unwrap();

        let loaded = RosterConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.data, "students.json");
        assert_eq!(loaded.output, "html");
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "{").unwrap();
        assert!(matches!(
            RosterConfig::load(temp_dir.path()),
            Err(RosterError::Config(_))
        ));
    }

    #[test]
    fn test_rejects_unknown_key_and_format() {
        let mut config = RosterConfig::default();
        assert!(config.set("colour", "red").is_err());
        assert!(config.set("output", "xml").is_err());
        assert!(config.get("colour").is_err());
        assert_eq!(config.get("output").unwrap(), "term");
    }

    #[test]
    fn test_explicit_data_wins() {
        let config = RosterConfig::default();
        assert_eq!(config.resolve_data(Some("other.json")), "other.json");
    }
}
