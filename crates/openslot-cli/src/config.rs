//! Defaults file for query parameters.
//!
//! `~/.openslot/config.json` can preset the timezone, working hours, and
//! minimum slot duration so they need not be repeated on every invocation.
//! Explicit flags always win. A missing file means defaults; a malformed
//! file is an error, never a silent reset.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    pub timezone: Option<String>,
    pub working_hours: Option<String>,
    pub min_duration_minutes: Option<i64>,
}

impl Config {
    /// `$OPENSLOT_CONFIG` if set, otherwise `~/.openslot/config.json`.
    fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("OPENSLOT_CONFIG") {
            return Some(PathBuf::from(path));
        }
        dirs::home_dir().map(|home| home.join(".openslot").join("config.json"))
    }

    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Malformed config file: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let config = Config::load_from(Path::new("/nonexistent/openslot-config.json")).unwrap();
        assert!(config.timezone.is_none());
        assert!(config.working_hours.is_none());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = std::env::temp_dir().join("openslot-config-malformed.json");
        fs::write(&path, "{not json").unwrap();
        assert!(Config::load_from(&path).is_err());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn populated_file_parses() {
        let path = std::env::temp_dir().join("openslot-config-ok.json");
        fs::write(
            &path,
            r#"{"timezone":"Europe/London","working_hours":"10-18","min_duration_minutes":45}"#,
        )
        .unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.timezone.as_deref(), Some("Europe/London"));
        assert_eq!(config.working_hours.as_deref(), Some("10-18"));
        assert_eq!(config.min_duration_minutes, Some(45));
        let _ = fs::remove_file(&path);
    }
}
