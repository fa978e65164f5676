use crate::config::{default_close_prompt, default_terminal_exec_flag, default_terminal_program};

use elm_tray_core::TerminalWrapper;
use serde::{Deserialize, Serialize};

/// Terminal used for Status, Logs, System Check and Check Updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalConfig {
    /// Terminal emulator program.
    #[serde(default = "default_terminal_program")]
    pub program: String,
    /// Flag introducing the command to run (e.g. `-e`).
    #[serde(default = "default_terminal_exec_flag")]
    pub exec_flag: String,
    /// Prompt shown before the window closes.
    #[serde(default = "default_close_prompt")]
    pub close_prompt: String,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        let TerminalWrapper {
            program,
            exec_flag,
            close_prompt,
        } = TerminalWrapper::default();
        Self {
            program,
            exec_flag,
            close_prompt,
        }
    }
}

impl From<&TerminalConfig> for TerminalWrapper {
    fn from(config: &TerminalConfig) -> Self {
        TerminalWrapper {
            program: config.program.clone(),
            exec_flag: config.exec_flag.clone(),
            close_prompt: config.close_prompt.clone(),
        }
    }
}
