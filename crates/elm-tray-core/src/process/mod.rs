mod command_runner;
mod run_state;
mod supervisor;
mod supervisor_event;

pub use {
    command_runner::{CommandRunner, TerminalWrapper},
    run_state::RunState,
    supervisor::ProcessSupervisor,
    supervisor_event::{RebuildAck, SupervisorEvent},
};
