//! Model shared by the region settings picker: settings values, reference
//! data adapters, dropdown options, the save/cancel dialog transaction and
//! its configuration.

pub mod config;
pub mod dialog;
pub mod options;
pub mod reference_data;
pub mod settings;

pub use config::{ConfigError, SettingsConfig};
pub use dialog::{DialogAction, DialogError, SettingsDialog, Transition};
pub use options::{CountryOption, LabelOption, SelectOption};
pub use reference_data::{flag_icon_url, IsoReferenceData, ReferenceData};
pub use settings::{ButtonLabel, CountryValue, EditBuffer, Settings, SettingsEdit};
