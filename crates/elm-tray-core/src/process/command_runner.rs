use crate::{CoreError, CoreResult, OneShotCommand};

use std::{
    panic::Location,
    path::{Path, PathBuf},
};

use error_location::ErrorLocation;
use tokio::process::Command;
use tracing::{info, instrument};

const DEFAULT_TERMINAL: &str = "x-terminal-emulator";
const DEFAULT_EXEC_FLAG: &str = "-e";
const DEFAULT_CLOSE_PROMPT: &str = "Press Enter to close...";

/// Terminal emulator used to show one-shot command output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalWrapper {
    /// Terminal program.
    pub program: String,
    /// Flag after which the terminal takes the command to execute.
    pub exec_flag: String,
    /// Shown after the command finishes; the window closes on Enter.
    pub close_prompt: String,
}

impl Default for TerminalWrapper {
    fn default() -> Self {
        Self {
            program: DEFAULT_TERMINAL.to_string(),
            exec_flag: DEFAULT_EXEC_FLAG.to_string(),
            close_prompt: DEFAULT_CLOSE_PROMPT.to_string(),
        }
    }
}

/// Spawns unsupervised one-shot commands of the managed binary.
#[derive(Debug, Clone)]
pub struct CommandRunner {
    binary: PathBuf,
    terminal: TerminalWrapper,
}

impl CommandRunner {
    /// Create a runner for `binary`.
    pub fn new<P: AsRef<Path>>(binary: P, terminal: TerminalWrapper) -> Self {
        Self {
            binary: binary.as_ref().to_path_buf(),
            terminal,
        }
    }

    /// Spawn `cmd` and return without waiting for it.
    ///
    /// Must be called from within a tokio runtime. The child is not tracked.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::SpawnFailed`] if the process could not be started.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn spawn(&self, cmd: OneShotCommand) -> CoreResult<()> {
        let mut command = self.command_for(cmd);
        let program = PathBuf::from(command.as_std().get_program());

        let child = command.spawn().map_err(|source| CoreError::SpawnFailed {
            program,
            source,
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(pid = ?child.id(), "One-shot command started");

        Ok(())
    }

    pub(crate) fn command_for(&self, cmd: OneShotCommand) -> Command {
        if !cmd.needs_terminal() {
            let mut command = Command::new(&self.binary);
            command.args(cmd.args());
            return command;
        }

        let script = format!(
            "{} {}; printf '%s' {}; read _",
            shell_quote(&self.binary.to_string_lossy()),
            cmd.args().join(" "),
            shell_quote(&self.terminal.close_prompt),
        );

        let mut command = Command::new(&self.terminal.program);
        command
            .arg(&self.terminal.exec_flag)
            .arg("sh")
            .arg("-c")
            .arg(script);
        command
    }
}

fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}
