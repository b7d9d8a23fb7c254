use anyhow::{Context, Result};
use serde::Deserialize;
use shared::{CountryValue, ReferenceData, Settings, SettingsConfig};

use super::logging::{LogLevel, Logger};

const EMBEDDED_CONFIG: &str = include_str!("../../config/settings.json");

/// Everything configurable in the app, loaded once at startup
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub log_level: LogLevel,
    #[serde(flatten)]
    pub settings: SettingsConfig,
}

impl AppConfig {
    pub fn parse(json: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(json).context("failed to parse app config")?;
        config
            .settings
            .validate()
            .context("invalid settings section in app config")?;
        Ok(config)
    }

    /// Embedded config, or built-in defaults if it does not parse
    pub fn load() -> Self {
        match Self::parse(EMBEDDED_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                Logger::error_with_component("config", &format!("{:#}; using defaults", e));
                Self::default()
            }
        }
    }

    /// Initial committed settings. Falls back to the built-in defaults when a
    /// configured code is not in the dataset.
    pub fn initial_settings(&self, provider: &dyn ReferenceData) -> Settings {
        self.settings
            .initial_settings(provider)
            .or_else(|e| {
                Logger::warn_with_component("config", &format!("{}; using built-in defaults", e));
                SettingsConfig::default().initial_settings(provider)
            })
            .unwrap_or_else(|_| Settings {
                country: CountryValue::empty(),
                currency: String::new(),
                language: String::new(),
            })
    }
}
