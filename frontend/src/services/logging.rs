use std::cell::Cell;

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

thread_local! {
    static MIN_LEVEL: Cell<LogLevel> = Cell::new(LogLevel::Info);
}

/// Component-tagged logging to the browser console
pub struct Logger;

impl Logger {
    pub fn set_level(level: LogLevel) {
        MIN_LEVEL.with(|min| min.set(level));
    }

    pub fn enabled(level: LogLevel) -> bool {
        MIN_LEVEL.with(|min| level >= min.get())
    }

    pub fn debug_with_component(component: &str, message: &str) {
        Self::log_with_component(LogLevel::Debug, component, message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log_with_component(LogLevel::Info, component, message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log_with_component(LogLevel::Warn, component, message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log_with_component(LogLevel::Error, component, message);
    }

    pub fn log_with_component(level: LogLevel, component: &str, message: &str) {
        if !Self::enabled(level) {
            return;
        }

        let line = format!("[{}] {}: {}", level.as_str(), component, message);
        match level {
            LogLevel::Debug => gloo::console::debug!(line),
            LogLevel::Info => gloo::console::info!(line),
            LogLevel::Warn => gloo::console::warn!(line),
            LogLevel::Error => gloo::console::error!(line),
        }
    }
}
