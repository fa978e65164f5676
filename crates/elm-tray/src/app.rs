use crate::{AppResult, TrayCommand};

use elm_tray_core::{
    CommandRunner, CoreError, MenuAction, ProcessSupervisor, SupervisorEvent,
};
use tao::event_loop::EventLoopProxy;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};
use tray_icon::menu::MenuEvent;

/// Main application state.
///
/// Runs on the async runtime thread. Menu rebuilds go back to the main
/// thread through `tray_proxy` because `TrayIcon` is `!Send` and must remain
/// on the UI thread.
pub struct App {
    pub(crate) supervisor: ProcessSupervisor,
    pub(crate) commands: CommandRunner,
    pub(crate) tray_proxy: EventLoopProxy<TrayCommand>,
    pub(crate) events_rx: mpsc::Receiver<SupervisorEvent>,
}

/// What the main loop should do after handling an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

impl App {
    /// Run the main application event loop.
    ///
    /// Returns when Quit is selected or SIGINT/SIGTERM arrives. A running
    /// managed application is left alone.
    #[instrument(skip(self))]
    pub(crate) async fn run(mut self) -> AppResult<()> {
        info!("ELM Tray running. Right-click the tray icon for options.");

        let shutdown = shutdown_signal();
        tokio::pin!(shutdown);
        let mut signals_active = true;

        // Tray event forwarding via single persistent blocking task.
        //
        // MenuEvent::receiver() returns a crossbeam_channel::Receiver which
        // HAS blocking recv() -- zero polling, instant response, one thread.
        //
        // Shutdown: when menu_event_rx is dropped (main loop breaks),
        // menu_event_tx.blocking_send() fails, breaking the blocking loop.
        let (menu_event_tx, mut menu_event_rx) = mpsc::channel(32);
        tokio::task::spawn_blocking(move || {
            let receiver = MenuEvent::receiver();
            while let Ok(event) = receiver.recv() {
                if menu_event_tx.blocking_send(event).is_err() {
                    break;
                }
            }
        });

        loop {
            tokio::select! {
                Some(event) = menu_event_rx.recv() => {
                    if self.handle_menu_event(event).await == Flow::Exit {
                        break;
                    }
                }

                Some(SupervisorEvent::StateChanged { state, applied }) = self.events_rx.recv() => {
                    // A failed send drops the ack, which releases a pending launch.
                    let rebuild = TrayCommand::Rebuild(state, applied);
                    if self.tray_proxy.send_event(rebuild).is_err() {
                        warn!("Tray event loop gone, stopping");
                        break;
                    }
                }

                result = &mut shutdown, if signals_active => {
                    match result {
                        Ok(signal) => {
                            info!(signal, "Termination signal received");
                            self.request_shutdown();
                            break;
                        }
                        Err(e) => {
                            error!(error = %e, "Signal handling unavailable");
                            signals_active = false;
                        }
                    }
                }

                else => {
                    info!("All channels closed, shutting down");
                    break;
                }
            }
        }

        drop(menu_event_rx);

        info!("ELM Tray shut down");

        Ok(())
    }

    /// Decode the selected item and dispatch its action.
    #[instrument(skip(self))]
    async fn handle_menu_event(&self, event: MenuEvent) -> Flow {
        let action = match event.id.0.parse::<MenuAction>() {
            Ok(action) => action,
            Err(e) => {
                debug!(error = %e, "Ignoring menu event");
                return Flow::Continue;
            }
        };

        self.dispatch(action).await
    }

    #[instrument(skip(self))]
    async fn dispatch(&self, action: MenuAction) -> Flow {
        match action {
            MenuAction::Launch { profile } => match self.supervisor.launch(profile).await {
                Ok(run_id) => debug!(run_id = %run_id, "Launch dispatched"),
                Err(CoreError::LaunchRejected { running, .. }) => {
                    info!(running = ?running, "Already running, launch ignored");
                }
                Err(e) => error!(error = %e, "Launch failed"),
            },
            MenuAction::Command(cmd) => {
                if let Err(e) = self.commands.spawn(cmd) {
                    error!(command = ?cmd, error = %e, "Failed to run command");
                }
            }
            MenuAction::Quit => {
                info!("Quit requested from tray menu");
                self.request_shutdown();
                return Flow::Exit;
            }
        }

        Flow::Continue
    }

    fn request_shutdown(&self) {
        if self.tray_proxy.send_event(TrayCommand::Shutdown).is_err() {
            debug!("Tray event loop already closed");
        }
    }
}

/// Resolves with the signal name on SIGINT or SIGTERM (Ctrl+C off unix).
async fn shutdown_signal() -> std::io::Result<&'static str> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut sigint = signal(SignalKind::interrupt())?;
        let mut sigterm = signal(SignalKind::terminate())?;

        tokio::select! {
            _ = sigint.recv() => Ok("SIGINT"),
            _ = sigterm.recv() => Ok("SIGTERM"),
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await.map(|()| "Ctrl+C")
    }
}
