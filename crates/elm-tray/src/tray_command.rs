use elm_tray_core::{RebuildAck, RunState};

/// Commands sent from the async runtime to the main UI thread.
///
/// The main thread owns `TrayManager` (because `TrayIcon` is `!Send`),
/// so all menu rebuilds and the indicator shutdown flow through this enum.
#[derive(Debug)]
pub enum TrayCommand {
    /// Re-run profile discovery and replace the menu for this run state,
    /// then acknowledge so a pending launch may spawn its process.
    Rebuild(RunState, RebuildAck),
    /// Stop the indicator. The main thread will exit the event loop.
    Shutdown,
}
