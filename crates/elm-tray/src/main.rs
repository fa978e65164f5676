//! ELM Tray: status indicator and launcher for EVE Linux Manager.

mod app;
mod config;
mod error;
mod logging;
#[cfg(test)]
mod tests;
mod tray_command;
mod tray_manager;

pub(crate) use {
    app::App,
    error::{AppError, Result as AppResult},
    tray_command::TrayCommand,
    tray_manager::TrayManager,
};

use crate::config::Config;

use std::panic::Location;

use elm_tray_core::{CommandRunner, ElmPaths, ProcessSupervisor};
use error_location::ErrorLocation;
use tao::{
    event::Event,
    event_loop::{ControlFlow, EventLoopBuilder},
};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

/// Application entry point.
fn main() {
    let loaded = Config::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    let log_dir = Config::log_dir().ok();

    // Flushes the log file on drop; moved into the event loop closure below.
    let log_guard = logging::init(&config.logging, log_dir.as_deref());

    // Config::load runs before a subscriber exists, so report it here.
    match &loaded {
        Ok(_) => info!("Configuration loaded"),
        Err(e) => warn!(error = ?e, "Failed to load config, using defaults"),
    }

    let paths = match ElmPaths::from_env() {
        Ok(paths) => paths,
        Err(e) => {
            println!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = check_managed_binary(&paths) {
        error!(error = ?e, "Managed binary missing");
        println!("Error: elm not found at {}", paths.binary.display());
        println!("Install ELM first: ./install.sh");
        std::process::exit(1);
    }

    let event_loop = EventLoopBuilder::<TrayCommand>::with_user_event().build();
    let tray_proxy = event_loop.create_proxy();

    // TrayManager lives on the main thread - TrayIcon is !Send on all platforms.
    let mut tray_manager = match TrayManager::new(&paths) {
        Ok(tm) => tm,
        Err(e) => {
            error!("Failed to create TrayManager: {:?}", e);
            std::process::exit(1);
        }
    };

    let (events_tx, events_rx) = mpsc::channel(32);
    let mut app = Some(App {
        supervisor: ProcessSupervisor::new(&paths.binary, events_tx),
        commands: CommandRunner::new(&paths.binary, (&config.terminal).into()),
        tray_proxy,
        events_rx,
    });

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::UserEvent(cmd) => match cmd {
                TrayCommand::Rebuild(state, applied) => {
                    if let Err(e) = tray_manager.rebuild(&state) {
                        error!(error = ?e, "Failed to rebuild tray menu");
                    }
                    applied.ack();
                }
                TrayCommand::Shutdown => {
                    info!("Stopping tray event loop");
                    *control_flow = ControlFlow::ExitWithCode(0);
                }
            },
            Event::NewEvents(tao::event::StartCause::Init) => {
                #[cfg(target_os = "macos")]
                unsafe {
                    use core_foundation::runloop::{CFRunLoopGetMain, CFRunLoopWakeUp};
                    CFRunLoopWakeUp(CFRunLoopGetMain());
                }

                let Some(app) = app.take() else {
                    return;
                };

                // Spawn tokio runtime on separate thread.
                // TrayManager stays on the main thread.
                std::thread::spawn(move || {
                    let rt = match tokio::runtime::Runtime::new() {
                        Ok(rt) => rt,
                        Err(e) => {
                            error!("Failed to create tokio runtime: {:?}", e);
                            std::process::exit(1);
                        }
                    };

                    rt.block_on(async {
                        if let Err(e) = app.run().await {
                            error!(error = ?e, "App error");
                        }
                    });

                    // The menu event forwarder is parked in a blocking recv().
                    rt.shutdown_background();
                });
            }
            _ => {}
        }

        // Keep the log writer alive in the closure for the app's lifetime.
        let _ = &log_guard;
    });
}

/// Fail if the managed binary is not installed.
#[track_caller]
pub(crate) fn check_managed_binary(paths: &ElmPaths) -> AppResult<()> {
    if paths.binary_exists() {
        return Ok(());
    }

    Err(AppError::ManagedBinaryMissing {
        path: paths.binary.clone(),
        location: ErrorLocation::from(Location::caller()),
    })
}
