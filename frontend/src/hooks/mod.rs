pub mod use_settings_dialog;
