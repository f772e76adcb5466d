//! Analysis configuration file support.
//!
//! This module reads the analysis settings (dataset sources, cleaning rules and
//! report options) from a TOML file. Every key has a default, so a missing or
//! partial file still yields the fixed analysis sequence.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::ConfigError;
use crate::preprocessing::enricher::CoercionPolicy;
use crate::services::report::ReportFormat;
use crate::transformations::filtering::DEFAULT_MAX_NON_ENGLISH_CHARS;

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV_VAR: &str = "APP_PROFILES_CONFIG";

const DEFAULT_PLAY_STORE_SOURCE: &str =
    "https://raw.githubusercontent.com/gmayock/profitable_app_profiles/master/googleplaystore.csv";
const DEFAULT_APP_STORE_SOURCE: &str =
    "https://raw.githubusercontent.com/gmayock/profitable_app_profiles/master/AppleStore.csv";

/// Play Store row whose cells are shifted one column to the left.
pub const SHIFTED_PLAY_STORE_ROW: &str = "Life Made WI-Fi Touchscreen Photo Frame";

/// Analysis configuration from file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub sources: SourceSettings,
    #[serde(default)]
    pub cleaning: CleaningSettings,
    #[serde(default)]
    pub report: ReportSettings,
}

/// Dataset locations, each a filesystem path or an `http(s)://` URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSettings {
    #[serde(default = "default_play_store_source")]
    pub play_store: String,
    #[serde(default = "default_app_store_source")]
    pub app_store: String,
}

/// Cleaning rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleaningSettings {
    #[serde(default = "default_corrupt_identities")]
    pub corrupt_identities: Vec<String>,
    #[serde(default = "default_max_non_english_chars")]
    pub max_non_english_chars: usize,
    #[serde(default)]
    pub installs_policy: CoercionPolicy,
}

/// Report options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSettings {
    #[serde(default = "default_focus_category")]
    pub focus_category: String,
    #[serde(default = "default_focus_genre")]
    pub focus_genre: String,
    #[serde(default)]
    pub format: ReportFormat,
}

fn default_play_store_source() -> String {
    DEFAULT_PLAY_STORE_SOURCE.to_string()
}

fn default_app_store_source() -> String {
    DEFAULT_APP_STORE_SOURCE.to_string()
}

fn default_corrupt_identities() -> Vec<String> {
    vec![SHIFTED_PLAY_STORE_ROW.to_string()]
}

fn default_max_non_english_chars() -> usize {
    DEFAULT_MAX_NON_ENGLISH_CHARS
}

fn default_focus_category() -> String {
    "FAMILY".to_string()
}

fn default_focus_genre() -> String {
    "Entertainment".to_string()
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            play_store: default_play_store_source(),
            app_store: default_app_store_source(),
        }
    }
}

impl Default for CleaningSettings {
    fn default() -> Self {
        Self {
            corrupt_identities: default_corrupt_identities(),
            max_non_english_chars: default_max_non_english_chars(),
            installs_policy: CoercionPolicy::default(),
        }
    }
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            focus_category: default_focus_category(),
            focus_genre: default_focus_genre(),
            format: ReportFormat::default(),
        }
    }
}

impl AnalysisConfig {
    /// Load analysis configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(AnalysisConfig)` if successful
    /// * `Err(ConfigError)` if file cannot be read, parsed or validated
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: AnalysisConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load analysis configuration from the default location.
    ///
    /// Searches for `app_profiles.toml` in:
    /// 1. Current directory
    /// 2. `app_profiles/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = [
            PathBuf::from("app_profiles.toml"),
            PathBuf::from("app_profiles/app_profiles.toml"),
            PathBuf::from("../app_profiles.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                log::info!("Using configuration file {}", path.display());
                return Self::from_file(&path);
            }
        }

        Err(ConfigError::NotFound)
    }

    /// Resolve the configuration for a run.
    ///
    /// `APP_PROFILES_CONFIG` wins when set; otherwise the default locations are
    /// searched, and the built-in defaults are used when no file exists.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = env::var(CONFIG_ENV_VAR) {
            log::info!("Using configuration file {} from {}", path, CONFIG_ENV_VAR);
            return Self::from_file(path);
        }

        match Self::from_default_location() {
            Err(ConfigError::NotFound) => {
                log::info!("No configuration file found, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.sources.play_store.trim().is_empty() || self.sources.app_store.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "dataset sources must not be empty".to_string(),
            ));
        }
        if self.report.focus_category.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "report.focus_category must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_file_yields_defaults() {
        let config = AnalysisConfig::from_toml_str("").unwrap();
        assert_eq!(config.cleaning.max_non_english_chars, 3);
        assert_eq!(config.cleaning.installs_policy, CoercionPolicy::Abort);
        assert_eq!(
            config.cleaning.corrupt_identities,
            vec![SHIFTED_PLAY_STORE_ROW.to_string()]
        );
        assert_eq!(config.report.focus_category, "FAMILY");
        assert_eq!(config.report.format, ReportFormat::Table);
        assert!(config.sources.play_store.ends_with("googleplaystore.csv"));
    }

    #[test]
    fn test_partial_file_overrides() {
        let toml = r#"
            [sources]
            play_store = "data/googleplaystore.csv"

            [cleaning]
            installs_policy = "skip"

            [report]
            format = "json"
        "#;
        let config = AnalysisConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.sources.play_store, "data/googleplaystore.csv");
        assert!(config.sources.app_store.ends_with("AppleStore.csv"));
        assert_eq!(config.cleaning.installs_policy, CoercionPolicy::Skip);
        assert_eq!(config.cleaning.max_non_english_chars, 3);
        assert_eq!(config.report.format, ReportFormat::Json);
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[cleaning]\nmax_non_english_chars = 5\n").unwrap();

        let config = AnalysisConfig::from_file(file.path()).unwrap();
        assert_eq!(config.cleaning.max_non_english_chars, 5);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = AnalysisConfig::from_toml_str("[sources]\nplay_store = \"\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = AnalysisConfig::from_toml_str("[cleaning]\ninstalls_policy = \"retry\"\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = AnalysisConfig::from_file("/nonexistent/app_profiles.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read(_)));
    }
}
