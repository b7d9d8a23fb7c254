pub mod country_select;
pub mod currency_select;
pub mod language_select;
pub mod modal;
pub mod modal_button;
pub mod settings_selector;
