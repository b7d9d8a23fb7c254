use iso_currency::{Currency, IntoEnumIterator};
use isocountry::CountryCode;
use isolang::Language;

/// Host serving the 3x2 country flag icons
pub const FLAG_ICON_BASE_URL: &str = "https://catamphetamine.gitlab.io/country-flag-icons/3x2";

/// Flag icon URL for an ISO 3166-1 alpha-2 code. Codes are upper-cased.
pub fn flag_icon_url(code: &str) -> String {
    format!("{}/{}.svg", FLAG_ICON_BASE_URL, code.to_uppercase())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRecord {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyRecord {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageRecord {
    pub code: String,
    /// English name
    pub name: String,
    pub native_name: String,
}

/// Read-only lookup datasets the selectors are built from
pub trait ReferenceData {
    fn countries(&self) -> Vec<CountryRecord>;

    fn currencies(&self) -> Vec<CurrencyRecord>;

    /// Languages for the given ISO 639-1 codes, in the order given.
    /// Unknown codes are skipped.
    fn languages(&self, codes: &[String]) -> Vec<LanguageRecord>;

    fn country_name(&self, code: &str) -> Option<String> {
        self.countries()
            .into_iter()
            .find(|country| country.code.eq_ignore_ascii_case(code))
            .map(|country| country.name)
    }
}

/// Autonyms are stored lowercase ("polski"); labels start with a capital.
fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// ISO datasets backed by the `isocountry`, `iso_currency` and `isolang` crates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IsoReferenceData;

impl ReferenceData for IsoReferenceData {
    fn countries(&self) -> Vec<CountryRecord> {
        CountryCode::iter()
            .map(|code| CountryRecord {
                code: code.alpha2().to_string(),
                name: code.name().to_string(),
            })
            .collect()
    }

    fn currencies(&self) -> Vec<CurrencyRecord> {
        Currency::iter()
            .map(|currency| CurrencyRecord {
                code: currency.code().to_string(),
                name: currency.name().to_string(),
            })
            .collect()
    }

    fn languages(&self, codes: &[String]) -> Vec<LanguageRecord> {
        codes
            .iter()
            .filter_map(|code| {
                let language = Language::from_639_1(&code.to_lowercase())?;
                let name = language.to_name().to_string();
                let native_name = language
                    .to_autonym()
                    .map(capitalize_first)
                    .unwrap_or_else(|| name.clone());
                Some(LanguageRecord {
                    code: code.to_lowercase(),
                    name,
                    native_name,
                })
            })
            .collect()
    }

    fn country_name(&self, code: &str) -> Option<String> {
        CountryCode::for_alpha2(&code.to_uppercase())
            .ok()
            .map(|country| country.name().to_string())
    }
}
