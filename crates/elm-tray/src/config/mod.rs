#[allow(clippy::module_inception)]
mod config;
mod logging_config;
mod terminal_config;

pub(crate) use {
    config::Config, logging_config::LoggingConfig, terminal_config::TerminalConfig,
};

use elm_tray_core::TerminalWrapper;

pub(crate) const DEFAULT_LOG_FILTER: &str = "elm_tray=debug,elm_tray_core=debug";
pub(crate) const DEFAULT_LOG_TO_FILE: bool = false;

// Terminal defaults are owned by the core wrapper.
pub(crate) fn default_terminal_program() -> String {
    TerminalWrapper::default().program
}

pub(crate) fn default_terminal_exec_flag() -> String {
    TerminalWrapper::default().exec_flag
}

pub(crate) fn default_close_prompt() -> String {
    TerminalWrapper::default().close_prompt
}

pub(crate) fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

pub(crate) fn default_log_to_file() -> bool {
    DEFAULT_LOG_TO_FILE
}
