//! Application configuration.

use crate::consts::dashboard_consts::{DEFAULT_API_URL, polling};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::{fs, path::Path};

/// Which elements the page template provides.
///
/// Absent elements are skipped by every renderer.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct PageLayout {
    pub stat_counters: bool,
    pub activity_chart: bool,
    pub distribution_chart: bool,
    pub videos_grid: bool,
    pub users_table: bool,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            stat_counters: true,
            activity_chart: true,
            distribution_chart: true,
            videos_grid: true,
            users_table: true,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Base URL of the dashboard API.
    pub api_url: String,
    /// Seconds between automatic reloads.
    pub poll_interval_secs: u64,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Where the rendered page document is written.
    pub snapshot_path: PathBuf,
    /// Directory receiving export files.
    pub export_dir: PathBuf,
    pub layout: PageLayout,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            poll_interval_secs: polling::POLL_INTERVAL_SECS,
            request_timeout_secs: polling::REQUEST_TIMEOUT_SECS,
            snapshot_path: PathBuf::from("dashboard.html"),
            export_dir: PathBuf::from("exports"),
            layout: PageLayout::default(),
        }
    }
}

impl Config {
    /// Create Config pointing at the given API.
    pub fn new(api_url: String) -> Self {
        Config {
            api_url,
            ..Config::default()
        }
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// Missing fields fall back to their defaults.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, std::io::Error> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Apply an API URL override, ignoring blank values.
    pub fn with_api_url(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url.filter(|url| !url.trim().is_empty()) {
            self.api_url = url;
        }
        self
    }
}

/// Default location of the config file: `~/.bot-dashboard/config.json`.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home = home::home_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    Ok(home.join(".bot-dashboard").join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    // Loading a saved configuration file should return the same configuration.
    fn test_load_recovers_saved_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::new("http://dashboard.internal:8080".to_string());
        config.layout.distribution_chart = false;
        config.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config, loaded_config);
    }

    #[test]
    // Saving a configuration should create directories if they don't exist.
    fn test_save_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nonexistent_dir").join("config.json");

        let config = Config::default();
        let result = config.save(&path);

        assert!(result.is_ok(), "Failed to save config");
        assert!(
            path.parent().unwrap().exists(),
            "Parent directory does not exist"
        );
    }

    #[test]
    // Saving a configuration should overwrite an existing file.
    fn test_save_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config1 = Config::new("http://first:5000".to_string());
        config1.save(&path).unwrap();

        let config2 = Config::new("http://second:5000".to_string());
        config2.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config2, loaded_config);
    }

    #[test]
    // Loading an invalid JSON file should return an error.
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid_config.json");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "invalid json").unwrap();

        let result = Config::load_from_file(&path);
        assert!(result.is_err());
    }

    #[test]
    // Fields missing from the file take their default values.
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"poll_interval_secs": 5, "layout": {"users_table": false}}"#).unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.poll_interval_secs, 5);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(!config.layout.users_table);
        assert!(config.layout.videos_grid);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_or_default(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_blank_api_url_override_is_ignored() {
        let config = Config::default().with_api_url(Some("  ".to_string()));
        assert_eq!(config.api_url, DEFAULT_API_URL);

        let config = Config::default().with_api_url(Some("http://other:1".to_string()));
        assert_eq!(config.api_url, "http://other:1");
    }
}
