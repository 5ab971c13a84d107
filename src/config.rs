use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use log::LevelFilter;
use serde::Deserialize;

use crate::controller::ControllerOptions;
use crate::definitions::{DEFAULT_CODE_LENGTH, DEFAULT_RESEND_SECONDS, Page};

/// Environment variable pointing at an alternative settings file.
pub const CONFIG_ENV: &str = "PARKING_AUTH_CONFIG";
const CONFIG_PATH: &str = "config/parking-auth.toml";

/// Runtime settings, read from `config/parking-auth.toml`.
/// Every field is optional in the file and falls back to its default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// The screen shown at startup.
    pub start_page: Page,
    pub tick_rate_ms: u64,
    /// Log file, relative to the working directory.
    pub log_file: PathBuf,
    pub log_level: String,
    pub resend_seconds: u32,
    pub code_length: u8,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("code_length must be between 1 and 9, got {0}")]
    CodeLength(u8),
    #[error("resend_seconds must be greater than zero")]
    ResendSeconds,
    #[error("tick_rate_ms must be greater than zero")]
    TickRate,
    #[error("unknown log level: {0}")]
    LogLevel(String),
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            start_page: Page::Login,
            tick_rate_ms: 50,
            log_file: PathBuf::from("log/parking-auth.log"),
            log_level: String::from("info"),
            resend_seconds: DEFAULT_RESEND_SECONDS,
            code_length: DEFAULT_CODE_LENGTH,
        }
    }
}

impl Settings {
    /// Loads settings for the given working directory.
    ///
    /// `PARKING_AUTH_CONFIG` takes precedence over `config/parking-auth.toml`;
    /// when neither file exists the defaults are used.
    pub fn load(root: &Path) -> Result<Self> {
        let config_path = match env::var(CONFIG_ENV) {
            Ok(path) if !path.is_empty() => root.join(path),
            _ => root.join(CONFIG_PATH),
        };
        if !config_path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read settings: {}", config_path.display()))?;
        Self::from_toml_str(&raw)
            .with_context(|| format!("invalid settings: {}", config_path.display()))
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(raw).context("failed to parse settings")?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(1..=9).contains(&self.code_length) {
            return Err(SettingsError::CodeLength(self.code_length));
        }
        if self.resend_seconds == 0 {
            return Err(SettingsError::ResendSeconds);
        }
        if self.tick_rate_ms == 0 {
            return Err(SettingsError::TickRate);
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter, SettingsError> {
        self.log_level
            .parse()
            .map_err(|_| SettingsError::LogLevel(self.log_level.clone()))
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn controller_options(&self) -> ControllerOptions {
        ControllerOptions {
            code_length: self.code_length,
            resend_seconds: self.resend_seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.controller_options(), ControllerOptions::default());
        assert_eq!(settings.tick_rate(), Duration::from_millis(50));
    }

    #[test]
    fn parses_partial_file() {
        let settings = Settings::from_toml_str(
            r#"
            start_page = "verification"
            resend_seconds = 30
            log_level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(settings.start_page, Page::Verification);
        assert_eq!(settings.resend_seconds, 30);
        assert_eq!(settings.code_length, DEFAULT_CODE_LENGTH);
        assert_eq!(settings.level_filter().unwrap(), LevelFilter::Debug);
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(Settings::from_toml_str("code_length = 0").is_err());
        assert!(Settings::from_toml_str("code_length = 12").is_err());
        assert!(Settings::from_toml_str("resend_seconds = 0").is_err());
        assert!(Settings::from_toml_str("tick_rate_ms = 0").is_err());
        assert!(Settings::from_toml_str("log_level = \"loud\"").is_err());
        assert!(Settings::from_toml_str("start_page = \"checkout\"").is_err());
    }

    #[test]
    fn validation_errors_name_the_field() {
        let settings = Settings {
            code_length: 12,
            ..Settings::default()
        };
        let err = settings.validate().unwrap_err();
        assert_eq!(err.to_string(), "code_length must be between 1 and 9, got 12");
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let root = std::env::temp_dir().join("parking-auth-missing-config");
        let settings = Settings::load(&root).unwrap();
        assert_eq!(settings.start_page, Page::Login);
    }
}
