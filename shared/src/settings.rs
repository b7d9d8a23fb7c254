use serde::{Deserialize, Serialize};

use crate::reference_data::flag_icon_url;

/// A country as shown in the picker
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountryValue {
    /// ISO 3166-1 alpha-2 code
    pub code: String,
    /// Display name (official English name)
    pub name: String,
    /// Flag icon URL, always derived from `code`
    pub icon: String,
}

impl CountryValue {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        let code = code.into();
        let icon = flag_icon_url(&code);
        Self {
            code,
            name: name.into(),
            icon,
        }
    }

    /// The explicit "nothing selected" value
    pub fn empty() -> Self {
        Self {
            code: String::new(),
            name: String::new(),
            icon: String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }
}

/// The settings record, used both for committed state and the edit draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub country: CountryValue,
    /// Composed currency label, e.g. "USD - US Dollar"
    pub currency: String,
    /// Composed language label, e.g. "English - English"
    pub language: String,
}

impl Settings {
    pub fn button_label(&self) -> ButtonLabel {
        ButtonLabel::from(self)
    }
}

/// A change to exactly one settings field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsEdit {
    Country(CountryValue),
    Currency(String),
    Language(String),
}

/// Falls back to an explicit empty string when a selector reports no pick
pub fn selection_or_empty(selection: Option<String>) -> String {
    selection.unwrap_or_default()
}

/// Draft of the settings while the dialog is open, one cell per field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    country: CountryValue,
    currency: String,
    language: String,
}

impl EditBuffer {
    pub fn seeded_from(committed: &Settings) -> Self {
        Self {
            country: committed.country.clone(),
            currency: committed.currency.clone(),
            language: committed.language.clone(),
        }
    }

    pub fn apply(&mut self, edit: SettingsEdit) {
        match edit {
            SettingsEdit::Country(country) => self.country = country,
            SettingsEdit::Currency(currency) => self.currency = currency,
            SettingsEdit::Language(language) => self.language = language,
        }
    }

    pub fn country(&self) -> &CountryValue {
        &self.country
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Flushes all three cells into a complete record
    pub fn into_settings(self) -> Settings {
        Settings {
            country: self.country,
            currency: self.currency,
            language: self.language,
        }
    }
}

/// What the commit button displays. Equality of this value decides whether
/// the button renders again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonLabel {
    pub country: String,
    pub currency: String,
    pub language: String,
}

impl ButtonLabel {
    pub fn text(&self) -> String {
        format!("{} - ({} - {})", self.country, self.currency, self.language)
    }
}

impl From<&Settings> for ButtonLabel {
    fn from(settings: &Settings) -> Self {
        Self {
            country: settings.country.name.clone(),
            currency: settings.currency.clone(),
            language: settings.language.clone(),
        }
    }
}
