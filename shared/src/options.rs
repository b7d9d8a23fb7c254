//! Turns reference data records into dropdown options.

use crate::reference_data::{CurrencyRecord, LanguageRecord, ReferenceData};
use crate::settings::CountryValue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption<V> {
    pub value: V,
    pub label: String,
}

pub type CountryOption = SelectOption<CountryValue>;

/// Options whose value and label are the same composed string
pub type LabelOption = SelectOption<String>;

impl LabelOption {
    fn composed(label: String) -> Self {
        Self {
            value: label.clone(),
            label,
        }
    }
}

/// "<left> - <right>"
pub fn compose_label(left: &str, right: &str) -> String {
    format!("{} - {}", left, right)
}

pub fn currency_label(record: &CurrencyRecord) -> String {
    compose_label(&record.code, &record.name)
}

pub fn language_label(record: &LanguageRecord) -> String {
    compose_label(&record.name, &record.native_name)
}

pub fn country_options(provider: &dyn ReferenceData) -> Vec<CountryOption> {
    provider
        .countries()
        .into_iter()
        .map(|record| {
            let value = CountryValue::new(record.code, record.name);
            SelectOption {
                label: value.name.clone(),
                value,
            }
        })
        .collect()
}

/// One option per currency, labelled "<code> - <name>"
pub fn currency_options(provider: &dyn ReferenceData) -> Vec<LabelOption> {
    provider
        .currencies()
        .into_iter()
        .map(|record| LabelOption::composed(currency_label(&record)))
        .collect()
}

/// One option per allowed language, labelled "<english name> - <native name>"
pub fn language_options(provider: &dyn ReferenceData, allow_list: &[String]) -> Vec<LabelOption> {
    provider
        .languages(allow_list)
        .into_iter()
        .map(|record| LabelOption::composed(language_label(&record)))
        .collect()
}

/// Prepends `current` when it is not one of the options, so a selector can
/// always show the value it was given.
pub fn with_current(mut options: Vec<LabelOption>, current: &str) -> Vec<LabelOption> {
    if !current.is_empty() && !options.iter().any(|option| option.value == current) {
        options.insert(0, LabelOption::composed(current.to_string()));
    }
    options
}

/// Case-insensitive substring match on country name or code.
pub fn filter_country_options<'a>(options: &'a [CountryOption], query: &str) -> Vec<&'a CountryOption> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return options.iter().collect();
    }

    options
        .iter()
        .filter(|option| {
            option.label.to_lowercase().contains(&query)
                || option.value.code.to_lowercase().contains(&query)
        })
        .collect()
}
