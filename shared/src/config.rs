use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::options::{currency_label, language_label};
use crate::reference_data::ReferenceData;
use crate::settings::{CountryValue, Settings};

pub const DEFAULT_COUNTRY_CODE: &str = "US";
pub const DEFAULT_CURRENCY_CODE: &str = "USD";
pub const DEFAULT_LANGUAGE_CODE: &str = "en";
pub const DEFAULT_LANGUAGE_CODES: [&str; 6] = ["en", "de", "pl", "fr", "it", "es"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid settings config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown default country code '{0}'")]
    UnknownCountry(String),
    #[error("unknown default currency code '{0}'")]
    UnknownCurrency(String),
    #[error("unknown default language code '{0}'")]
    UnknownLanguage(String),
    #[error("default language '{0}' is not in the language allow-list")]
    DefaultLanguageNotAllowed(String),
    #[error("language allow-list is empty")]
    NoLanguages,
    #[error("'{0}' is not an ISO 639-1 language code")]
    InvalidLanguageCode(String),
}

/// Initial values and option sets for the settings picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsConfig {
    /// ISO 3166-1 alpha-2 code of the initially committed country
    pub default_country: String,
    /// ISO 4217 code of the initially committed currency
    pub default_currency: String,
    /// ISO 639-1 code of the initially committed language
    pub default_language: String,
    /// ISO 639-1 codes offered by the language selector
    pub languages: Vec<String>,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            default_country: DEFAULT_COUNTRY_CODE.to_string(),
            default_currency: DEFAULT_CURRENCY_CODE.to_string(),
            default_language: DEFAULT_LANGUAGE_CODE.to_string(),
            languages: DEFAULT_LANGUAGE_CODES.iter().map(|code| code.to_string()).collect(),
        }
    }
}

impl SettingsConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SettingsConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.languages.is_empty() {
            return Err(ConfigError::NoLanguages);
        }
        if let Some(code) = self
            .languages
            .iter()
            .find(|code| code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()))
        {
            return Err(ConfigError::InvalidLanguageCode(code.clone()));
        }
        if !self
            .languages
            .iter()
            .any(|code| code.eq_ignore_ascii_case(&self.default_language))
        {
            return Err(ConfigError::DefaultLanguageNotAllowed(self.default_language.clone()));
        }
        Ok(())
    }

    /// The committed settings the dialog starts with. Labels come from the
    /// provider so they match the selector options exactly.
    pub fn initial_settings(&self, provider: &dyn ReferenceData) -> Result<Settings, ConfigError> {
        let code = self.default_country.to_uppercase();
        let name = provider
            .country_name(&code)
            .ok_or_else(|| ConfigError::UnknownCountry(self.default_country.clone()))?;

        let currency = provider
            .currencies()
            .iter()
            .find(|record| record.code.eq_ignore_ascii_case(&self.default_currency))
            .map(currency_label)
            .ok_or_else(|| ConfigError::UnknownCurrency(self.default_currency.clone()))?;

        let language = provider
            .languages(&[self.default_language.clone()])
            .first()
            .map(language_label)
            .ok_or_else(|| ConfigError::UnknownLanguage(self.default_language.clone()))?;

        Ok(Settings {
            country: CountryValue::new(code, name),
            currency,
            language,
        })
    }
}
